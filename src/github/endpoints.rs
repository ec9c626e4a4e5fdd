// GitHub API endpoint functions.
// Repository listings are returned as raw JSON so the proxy forwards them verbatim.

use serde_json::Value;

use crate::error::{ProxyError, Result, Upstream};

use super::client::GitHubClient;

impl GitHubClient {
    /// Get the public repositories of `user`.
    pub async fn list_user_repos(&self, user: &str) -> Result<Value> {
        let response = self.get(&format!("/users/{}/repos", user)).await?;
        let body = response
            .text()
            .await
            .map_err(|source| ProxyError::Transport {
                service: Upstream::GitHub,
                source,
            })?;
        let repos: Value = serde_json::from_str(&body)?;
        Ok(repos)
    }
}
