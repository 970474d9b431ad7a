//! Holocron items service entry point.
//!
//! # Configuration
//!
//! - `SERVICE_HOST` - Listener address (default: 0.0.0.0)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `SERVICE_NAME` - Service name reported at startup (default: items)
//! - `METRICS_ENABLED` - Install the Prometheus recorder (default: true)

use tracing::{error, info};

use holocron_service_items::{ServiceConfig, router};
use holocron_service_shared::{AppState, LoggingConfig, MetricsConfig, init_logging, init_metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (reads LOG_FORMAT from environment)
    let logging_config = LoggingConfig::from_env().with_service("items");
    init_logging(&logging_config);

    // Metrics are optional
    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let config = ServiceConfig::from_env();
    info!(host = %config.host, port = config.port, "starting items service");

    let state = AppState::seeded();
    let app = router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!(error = %e, addr = %addr, "failed to bind listener");
        e
    })?;
    info!(addr = %addr, "listening on");

    axum::serve(listener, app).await?;

    Ok(())
}
