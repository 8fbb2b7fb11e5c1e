//! FrictionScore: Onboarding Friction Analyzer for SaaS Products

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use frictionscore::{
    analysis::AnalysisPipeline,
    config::{Config, LogFormat},
    http::HttpServer,
};
use tokio::sync::broadcast;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "frictionscore")]
#[command(about = "Friction score analyzer for self-serve SaaS products")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Listen address
        #[arg(short, long)]
        listen: Option<String>,
    },

    /// Analyze a single product URL and print the report as JSON
    Analyze {
        /// Product URL (scheme optional)
        url: String,

        /// Include intermediate scoring signals in the report
        #[arg(long)]
        debug: bool,
    },

    /// Initialize a new configuration file
    Init {
        /// Output directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        let mut config = Config::default();
        config.providers.resolve_env();
        config
    };

    // Setup logging
    let level = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    match config.logging.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    match cli.command {
        Commands::Serve { listen } => serve(config, listen).await,
        Commands::Analyze { url, debug } => analyze(config, &url, debug).await,
        Commands::Init { path } => init_config(&path),
    }
}

async fn serve(mut config: Config, listen: Option<String>) -> Result<()> {
    if let Some(listen) = listen {
        config.server.listen_addr = listen;
    }

    let pipeline = Arc::new(AnalysisPipeline::new(&config.providers)?);
    let server = HttpServer::new(config.server.clone(), pipeline);

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl-C, shutting down");
            let _ = shutdown_tx.send(());
        }
    });

    server.run(shutdown_rx).await
}

async fn analyze(config: Config, url: &str, debug: bool) -> Result<()> {
    let pipeline = AnalysisPipeline::new(&config.providers)?;
    let report = pipeline.analyze(url, debug).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn init_config(path: &PathBuf) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    let target = path.join("config.toml");
    if target.exists() {
        anyhow::bail!("Config file already exists at '{}'", target.display());
    }
    let content =
        toml::to_string_pretty(&Config::default()).context("Failed to serialize config")?;
    std::fs::write(&target, content)
        .with_context(|| format!("Failed to write '{}'", target.display()))?;
    info!("Wrote default configuration to {}", target.display());
    Ok(())
}
