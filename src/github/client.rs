// GitHub API HTTP client.
// Handles default headers, optional authentication, and response status checks.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{ProxyError, Result, Upstream};

use super::types::RateLimit;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client for `base_url`, authenticating with `token` when given.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        // An empty token would send a bare `Bearer` header.
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ProxyError::Config(format!("invalid GitHub token: {}", e)))?,
            );
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("profile-proxy"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ProxyError::Config(format!("failed to build GitHub client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Make a GET request to the GitHub API.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ProxyError::Transport {
                service: Upstream::GitHub,
                source,
            })?;

        if let Some(rate) = RateLimit::from_headers(response.headers()) {
            tracing::debug!(
                limit = rate.limit,
                remaining = rate.remaining,
                reset_at = %rate.reset_at(),
                "GitHub rate limit"
            );
        }

        check_response(response).await
    }
}

/// Pass `200 OK` responses through; turn anything else into an upstream error.
async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }

    // The status is what the caller needs; an unreadable body is reported empty.
    let body = response.text().await.unwrap_or_default();
    Err(ProxyError::Upstream {
        service: Upstream::GitHub,
        status: status.as_u16(),
        body,
    })
}
