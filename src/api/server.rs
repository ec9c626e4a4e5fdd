//! API server for the profile proxy

use std::sync::Arc;

use anyhow::Result;
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::cache::FileCacheStore;
use crate::clock::SystemClock;
use crate::config::Config;
use crate::enrichment::EnrichmentService;
use crate::github::GitHubClient;
use crate::scrapin::ScrapinClient;

use super::routes::{AppState, get_profile, get_user_repos, health_check};

/// Build the router over an existing application state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/linkedin", get(get_profile))
        .route("/github", get(get_user_repos))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Build the production state: file-backed cache, wall clock, real upstreams
pub fn app_state(config: &Config) -> crate::error::Result<AppState> {
    let store = FileCacheStore::new(config.cache_file_path());
    info!("Using cache file {}", store.path().display());

    if config.scrapin_api_key.as_deref().is_none_or(str::is_empty) {
        warn!("SCRAPIN_API_KEY is not set; /linkedin requests will fail");
    }

    let enrichment = EnrichmentService::new(
        Arc::new(store),
        Arc::new(SystemClock),
        ScrapinClient::new(config.scrapin_url.clone()),
        config.scrapin_api_key.clone(),
    );
    let github = GitHubClient::new(&config.github_api_base, config.github_token.as_deref())?;

    Ok(AppState {
        enrichment,
        github,
        github_user: config.github_user.clone(),
        default_linkedin_url: config.default_linkedin_url.clone(),
    })
}

/// API server
pub struct ApiServer {
    config: Config,
}

impl ApiServer {
    /// Create a new API server with configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Start the API server and run until Ctrl-C
    pub async fn start(self) -> Result<()> {
        let state = Arc::new(app_state(&self.config)?);
        let app = router(state);

        let addr = self.config.bind_addr();
        info!("Starting API server on {}", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("API server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
