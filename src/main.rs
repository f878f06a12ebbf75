//! Binary entrypoint for the `natsort-ls` CLI.

use std::process::ExitCode;

use natsort_ls::config::{Config, DEFAULT_LOG_FILTER};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Load .env before reading the config so it can set NATSORT_LOG.
    let dotenv = dotenvy::dotenv();
    let config = Config::from_env();
    init_tracing(&config.log_filter);

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Error loading .env file: {e}"),
    }

    match natsort_ls::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
