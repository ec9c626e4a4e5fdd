// Scrapin API module.
// Client for the LinkedIn profile enrichment provider.

pub mod client;

pub use client::{SCRAPIN_URL, ScrapinClient};
