// Configuration loading.
// Layers defaults, an optional YAML file and environment variables via figment.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};

use crate::cache;
use crate::error::{ProxyError, Result};
use crate::github::GITHUB_API_BASE;
use crate::scrapin::SCRAPIN_URL;

/// Load `.env` from the working directory (or a parent) into the process environment.
///
/// Returns the file that was loaded, or `None` if there is none. Call before
/// [`Config::load`] so its variables are visible to the environment providers.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    env_file_outcome(dotenvy::dotenv())
}

/// Load a specific env file into the process environment.
pub fn load_env_file(path: &Path) -> Result<Option<PathBuf>> {
    env_file_outcome(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn env_file_outcome(result: dotenvy::Result<PathBuf>) -> Result<Option<PathBuf>> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(ProxyError::Config(format!("failed to load env file: {}", e))),
    }
}

/// Prefix for environment overrides, e.g. `PROFILE_PROXY_PORT=9000`.
pub const ENV_PREFIX: &str = "PROFILE_PROXY_";

/// Unprefixed variables the service also honours.
const RAW_ENV_KEYS: [&str; 2] = ["SCRAPIN_API_KEY", "GITHUB_TOKEN"];

pub const DEFAULT_LINKEDIN_URL: &str = "https://www.linkedin.com/in/ferranterico/";
pub const DEFAULT_GITHUB_USER: &str = "ricorf";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Cache file location; the user cache directory when unset.
    pub cache_file: Option<PathBuf>,
    pub scrapin_url: String,
    /// Absence is reported per request, not at startup.
    pub scrapin_api_key: Option<String>,
    /// Profile looked up when a request omits `linkedInUrl`.
    pub default_linkedin_url: String,
    pub github_api_base: String,
    pub github_user: String,
    pub github_token: Option<String>,
    pub log_level: String,
    /// `text` or `json`.
    pub log_format: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            cache_file: None,
            scrapin_url: SCRAPIN_URL.to_string(),
            scrapin_api_key: None,
            default_linkedin_url: DEFAULT_LINKEDIN_URL.to_string(),
            github_api_base: GITHUB_API_BASE.to_string(),
            github_user: DEFAULT_GITHUB_USER.to_string(),
            github_token: None,
            log_level: "info".to_string(),
            log_format: None,
        }
    }
}

impl Config {
    /// Load configuration from an optional YAML file plus the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)?
            .extract()
            .map_err(|e| ProxyError::Config(e.to_string()))
    }

    /// Build the provider stack without extracting it.
    pub fn figment(path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new();

        if let Some(p) = path {
            if !p.exists() {
                return Err(ProxyError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            figment = figment.merge(Yaml::file(p));
        }

        figment = figment
            .merge(Env::raw().only(&RAW_ENV_KEYS))
            .merge(Env::prefixed(ENV_PREFIX));

        Ok(figment)
    }

    /// Resolved cache file path.
    pub fn cache_file_path(&self) -> PathBuf {
        self.cache_file
            .clone()
            .unwrap_or_else(cache::default_cache_file)
    }

    /// Socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
