//! Profile proxy
//!
//! Forwards LinkedIn profile enrichment requests to Scrapin behind a
//! day-based cache, and passes GitHub repository listings straight through.

pub mod api;
pub mod cache;
pub mod cli;
pub mod clock;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod github;
pub mod logging;
pub mod scrapin;

pub use error::{ProxyError, Result};
pub use logging::setup_tracing;
