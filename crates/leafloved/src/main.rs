//! Leaf Love Advisor daemon - plant recommendation web server.
//!
//! Serves the preference form, the JSON recommendation API, and the
//! health/metrics endpoints from a fixed in-memory catalog.

use std::fs::OpenOptions;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use leafloved::server::{self, AppState};

/// Environment variable naming the log destination file. Unset or
/// unopenable means logs go to stderr.
const LOG_FILE_ENV: &str = "LEAFLOVE_LOG_FILE";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    info!("Leaf Love Advisor v{} starting", env!("CARGO_PKG_VERSION"));
    info!("Catalog loaded: {} plants", leaflove_common::catalog().len());

    server::run(AppState::new()).await
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_file = std::env::var(LOG_FILE_ENV).ok().filter(|p| !p.is_empty());
    match log_file {
        Some(path) => match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .init();
            }
            Err(err) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
                warn!("failed to open log file {path:?}: {err}, logging to stderr");
            }
        },
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
