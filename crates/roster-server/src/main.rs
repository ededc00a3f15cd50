//! Roster service binary.
//!
//! Wires configuration, logging, the `PostgreSQL` pool, the service
//! facade, and the HTTP server together, then serves until `Ctrl-C` or
//! `SIGTERM`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `roster-config.yaml` (or `ROSTER_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Connect the `PostgreSQL` pool and run migrations
//! 4. Build the service facade with the request deadline
//! 5. Serve HTTP until a shutdown signal, draining in-flight requests
//! 6. Close the pool

mod error;

use std::sync::Arc;

use roster_api::AppState;
use roster_core::config::LoggingConfig;
use roster_core::{LogFormat, PgRepository, PostgresPool, RosterConfig, RosterService};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ServerError;

/// Application entry point for the roster server.
///
/// # Errors
///
/// Returns an error if any startup step fails or the server stops with
/// a fatal error.
#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // 1. Load configuration. Logging is not up yet, so load errors are
    //    reported by the returned error alone.
    let config = RosterConfig::load()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;
    info!(
        bind = %config.server.bind_addr(),
        request_timeout_ms = config.service.request_timeout_ms,
        max_connections = config.database.max_connections,
        "roster-server starting"
    );

    // 3. Open the pool; migrations run here when enabled.
    let pool = PostgresPool::open(&config.database).await?;

    // 4. Build the service facade.
    let repo = Arc::new(PgRepository::new(&pool));
    let service = RosterService::new(repo, config.service.request_timeout());
    let state = AppState::new(service);

    // 5. Serve until shutdown.
    let served = roster_api::start_server(&config.server, state).await;

    // 6. Close the pool whether or not serving failed.
    pool.close().await;
    served?;

    info!("roster-server stopped");
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_logging(logging: &LoggingConfig) -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .map_err(|e| ServerError::Logging {
            message: format!("invalid log level {:?}: {e}", logging.level),
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match logging.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| ServerError::Logging {
        message: e.to_string(),
    })
}
