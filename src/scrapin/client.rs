// Scrapin enrichment API client.
// Issues the paid profile lookup and maps failures into proxy errors.

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::{ProxyError, Result, Upstream};

pub const SCRAPIN_URL: &str = "https://api.scrapin.io/enrichment/profile";

/// Client for the Scrapin profile enrichment endpoint.
#[derive(Debug, Clone)]
pub struct ScrapinClient {
    client: Client,
    url: String,
}

impl ScrapinClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Fetch enrichment data for a public LinkedIn profile URL.
    ///
    /// Any status other than `200 OK` is returned as [`ProxyError::Upstream`]
    /// carrying the provider's status and body.
    pub async fn fetch_profile(&self, api_key: &str, linkedin_url: &str) -> Result<Value> {
        let params = [("apikey", api_key), ("linkedInUrl", linkedin_url)];
        let transport = |source| ProxyError::Transport {
            service: Upstream::Scrapin,
            source,
        };

        let response = self
            .client
            .get(&self.url)
            .query(&params)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            // The status is what the caller needs; an unreadable body is reported empty.
            let body = response.text().await.unwrap_or_default();
            return Err(ProxyError::Upstream {
                service: Upstream::Scrapin,
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(transport)?;
        let profile: Value = serde_json::from_str(&body)?;
        Ok(profile)
    }
}

impl Default for ScrapinClient {
    fn default() -> Self {
        Self::new(SCRAPIN_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_error_status_keeps_status_and_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/enrichment/profile")
            .match_query(Matcher::Any)
            .with_status(402)
            .with_body("payment required")
            .create_async()
            .await;

        let client = ScrapinClient::new(format!("{}/enrichment/profile", server.url()));
        let err = client
            .fetch_profile("key", "https://www.linkedin.com/in/someone/")
            .await
            .unwrap_err();

        match err {
            ProxyError::Upstream {
                service,
                status,
                body,
            } => {
                assert_eq!(service, Upstream::Scrapin);
                assert_eq!(status, 402);
                assert_eq!(body, "payment required");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_json_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/enrichment/profile")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = ScrapinClient::new(format!("{}/enrichment/profile", server.url()));
        let err = client
            .fetch_profile("key", "https://www.linkedin.com/in/someone/")
            .await
            .unwrap_err();
        assert!(matches!(err, ProxyError::Json(_)));
    }
}
