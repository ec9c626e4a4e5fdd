// GitHub API module.
// Client for the repository listing passthrough.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{GITHUB_API_BASE, GitHubClient};
pub use types::RateLimit;
