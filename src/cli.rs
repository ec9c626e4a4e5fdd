// Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// HTTP proxy for LinkedIn profile enrichment and GitHub repository listings
#[derive(Parser, Debug, Default)]
#[command(name = "profile-proxy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long, env = "PROFILE_PROXY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path of the enrichment cache file
    #[arg(long)]
    pub cache_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long)]
    pub log_format: Option<String>,
}

impl Cli {
    /// Apply flags given on the command line on top of loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(cache_file) = &self.cache_file {
            config.cache_file = Some(cache_file.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.log_format = Some(format.clone());
        }
    }
}
