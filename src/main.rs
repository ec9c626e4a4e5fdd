use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, warn};

use profile_proxy::{
    api::ApiServer,
    cli::Cli,
    config::{Config, load_dotenv},
    setup_tracing,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Env file variables must be in place before config extraction; the
    // outcome is logged once tracing is up.
    let env_file = load_dotenv();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    cli.apply(&mut config);

    if let Err(e) = setup_tracing(&config.log_level, config.log_format.as_deref()) {
        eprintln!("Failed to setup tracing: {e}");
        return ExitCode::FAILURE;
    }

    match env_file {
        Ok(Some(path)) => debug!("Loaded env file: {}", path.display()),
        Ok(None) => {}
        Err(e) => warn!("{e}"),
    }

    match ApiServer::new(config).start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
