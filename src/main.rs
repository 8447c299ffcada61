//! HyperServe entry point.
//!
//! Initializes tracing, resolves configuration from the environment, builds
//! the Axum router and runs the HTTP server until SIGINT/SIGTERM.

use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hyperserve::config::{
    AppConfig, LogFormat, LoggingConfig, DEFAULT_LOG_FILTER, DEFAULT_PORT, SHUTDOWN_GRACE_SECS,
};
use hyperserve::http::shutdown_signal;
use hyperserve::{create_router, start_server};

#[tokio::main]
async fn main() -> ExitCode {
    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    if let Some(raw) = &config.http.rejected_port {
        tracing::warn!(value = %raw, default = DEFAULT_PORT, "Ignoring unparsable PORT");
    }
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.http.addr(),
        "Loaded configuration"
    );

    let app = create_router();

    match start_server(app, &config, shutdown_with_deadline()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            eprintln!("hyperserve: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Wait for SIGINT/SIGTERM, then give in-flight requests
/// [`SHUTDOWN_GRACE_SECS`] to finish before exiting with status 0 regardless.
async fn shutdown_with_deadline() {
    shutdown_signal().await;

    tracing::info!(
        "Graceful shutdown initiated, waiting up to {} seconds for connections to close",
        SHUTDOWN_GRACE_SECS
    );
    tokio::spawn(async {
        tokio::time::sleep(Duration::from_secs(SHUTDOWN_GRACE_SECS)).await;
        tracing::warn!("Connections did not close in time, exiting");
        std::process::exit(0);
    });
}

/// Initialize tracing with the configured filter and output format.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.filter).unwrap_or_else(|e| {
        eprintln!("hyperserve: invalid log filter {:?} ({e}), using default", logging.filter);
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
