// Error types for the profile proxy.
// Covers configuration, upstream HTTP, transport, cache and parsing failures.

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Third-party API a request was forwarded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Scrapin,
    GitHub,
}

impl Upstream {
    /// Prefix used when reporting an error status from this provider.
    pub fn error_prefix(&self) -> &'static str {
        match self {
            Upstream::Scrapin => "Error from Scrapin API",
            Upstream::GitHub => "GitHub API error",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::Scrapin => write!(f, "Scrapin API"),
            Upstream::GitHub => write!(f, "GitHub API"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Scrapin API key is missing")]
    MissingApiKey,

    /// The provider answered with a non-success status.
    #[error("{}: {}", .service.error_prefix(), .body)]
    Upstream {
        service: Upstream,
        status: u16,
        body: String,
    },

    /// The provider could not be reached at all.
    #[error("An error occurred while requesting the {service}: {source}")]
    Transport {
        service: Upstream,
        #[source]
        source: reqwest::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ProxyError>;

impl ProxyError {
    /// HTTP status reported to the caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable detail placed in the error body.
    pub fn detail(&self) -> String {
        match self {
            ProxyError::MissingApiKey
            | ProxyError::Upstream { .. }
            | ProxyError::Transport { .. } => self.to_string(),
            other => format!("An unexpected error occurred: {}", other),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.detail();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), %detail, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), %detail, "upstream rejected request");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
