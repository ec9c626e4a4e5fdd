// GitHub API response metadata.
// Repository payloads are forwarded untouched, so only header-derived types live here.

use reqwest::header::HeaderMap;

/// Rate limit information from GitHub API headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

impl RateLimit {
    /// Parse the `x-ratelimit-*` headers. Returns `None` if none are present.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let read = |name: &str| -> Option<u64> {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        };

        let limit = read("x-ratelimit-limit");
        let remaining = read("x-ratelimit-remaining");
        let reset = read("x-ratelimit-reset");

        if limit.is_none() && remaining.is_none() && reset.is_none() {
            return None;
        }

        Some(Self {
            limit: limit.unwrap_or_default(),
            remaining: remaining.unwrap_or_default(),
            reset: reset.unwrap_or_default(),
        })
    }

    /// Reset time formatted as `HH:MM:SS` UTC.
    pub fn reset_at(&self) -> String {
        chrono::DateTime::from_timestamp(self.reset as i64, 0)
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}
