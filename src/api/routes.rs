//! API routes for the profile proxy

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enrichment::{EnrichmentService, ProfileResponse};
use crate::error::Result;
use crate::github::GitHubClient;

/// Application state shared by all handlers
pub struct AppState {
    pub enrichment: EnrichmentService,
    pub github: GitHubClient,
    pub github_user: String,
    pub default_linkedin_url: String,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Query parameters for `/linkedin`
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    #[serde(rename = "linkedInUrl")]
    pub linkedin_url: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Profile enrichment endpoint
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProfileQuery>,
) -> Result<Json<ProfileResponse>> {
    let linkedin_url = params
        .linkedin_url
        .as_deref()
        .unwrap_or(&state.default_linkedin_url);

    let response = state.enrichment.get_profile(linkedin_url).await?;
    Ok(Json(response))
}

/// Repository listing passthrough
pub async fn get_user_repos(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    let repos = state.github.list_user_repos(&state.github_user).await?;
    Ok(Json(repos))
}
