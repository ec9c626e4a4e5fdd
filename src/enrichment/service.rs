// Enrichment service.
// Combines the cache store, the clock and the Scrapin client behind the /linkedin endpoint.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::cache::{CacheRecord, CacheStore};
use crate::clock::Clock;
use crate::error::{ProxyError, Result};
use crate::scrapin::ScrapinClient;

use super::policy::{self, Decision, Provenance};

/// Body returned by the enrichment endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub message: String,
    pub data: Value,
}

impl ProfileResponse {
    pub fn new(provenance: Provenance, data: Value) -> Self {
        Self {
            message: provenance.message().to_string(),
            data,
        }
    }
}

pub struct EnrichmentService {
    store: Arc<dyn CacheStore>,
    clock: Arc<dyn Clock>,
    scrapin: ScrapinClient,
    api_key: Option<String>,
}

impl EnrichmentService {
    pub fn new(
        store: Arc<dyn CacheStore>,
        clock: Arc<dyn Clock>,
        scrapin: ScrapinClient,
        api_key: Option<String>,
    ) -> Self {
        Self {
            store,
            clock,
            scrapin,
            // An empty key is as unusable as a missing one.
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    /// Answer an enrichment request, from cache when the day-based policy allows.
    pub async fn get_profile(&self, linkedin_url: &str) -> Result<ProfileResponse> {
        let api_key = self.api_key.as_deref().ok_or(ProxyError::MissingApiKey)?;

        let today = self.clock.today();
        let record = self.store.get().await?.unwrap_or_default();

        match policy::decide(today, &record) {
            Decision::Serve { provenance, data } => {
                debug!(
                    %today,
                    cached_on = ?record.last_request_date,
                    ?provenance,
                    "serving enrichment from cache"
                );
                Ok(ProfileResponse::new(provenance, data))
            }
            Decision::Fetch => self.refresh(api_key, linkedin_url, today).await,
        }
    }

    /// Call Scrapin and replace the cache record with the result.
    /// The store is only written after a successful upstream response.
    pub async fn refresh(
        &self,
        api_key: &str,
        linkedin_url: &str,
        today: NaiveDate,
    ) -> Result<ProfileResponse> {
        info!(%today, linkedin_url, "fetching fresh enrichment data");

        let data = self.scrapin.fetch_profile(api_key, linkedin_url).await?;
        self.store
            .put(&CacheRecord::new(today, data.clone()))
            .await?;

        Ok(ProfileResponse::new(Provenance::Fresh, data))
    }
}
