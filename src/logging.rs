// Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ProxyError, Result};

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`. `format` of `"json"` selects
/// structured output; anything else prints human-readable lines.
pub fn setup_tracing(level: &str, format: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    let installed = match format {
        Some("json") => subscriber.with(fmt::layer().json()).try_init(),
        _ => subscriber.with(fmt::layer()).try_init(),
    };

    installed.map_err(|e| ProxyError::Other(format!("failed to install tracing subscriber: {}", e)))
}
