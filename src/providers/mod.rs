//! Clients for the external scraping and search providers
//!
//! Both providers are treated as unreliable: callers map any error to an
//! empty default rather than aborting the analysis.

pub mod scrape;
pub mod search;

pub use scrape::{PageScrape, ScrapeClient};
pub use search::{SearchAnswer, SearchClient};
