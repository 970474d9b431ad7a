//! Health check and service information handlers.
//!
//! Provides `/health/live` and `/health/ready` for Kubernetes probes, the
//! plain `/health` check, and the `/` service information document.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator, always "ok" while serving.
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Number of records currently in the store (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_loaded: Option<usize>,

    /// RFC 3339 timestamp of when the store was seeded (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            items_loaded: None,
            started_at: None,
        }
    }

    /// Create a ready status with store information.
    pub fn ready(service: &str, version: &str, items: usize, started_at: String) -> Self {
        Self {
            items_loaded: Some(items),
            started_at: Some(started_at),
            ..Self::alive(service, version)
        }
    }
}

/// Body of the plain `/health` check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
}

/// Body of the `/` service information endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub description: String,
    pub version: String,
    pub health: String,
    pub metrics: String,
}

/// Liveness probe handler.
///
/// Returns 200 OK whenever the process is serving requests.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"holocron-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// An empty store is still ready: deletes may legitimately remove every
/// record.
///
/// ```text
/// GET /health/ready
/// {"status":"ok","service":"holocron-service-shared","version":"0.1.0","items_loaded":8,"started_at":"..."}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let status = HealthStatus::ready(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        state.items().len(),
        state.started_at().to_rfc3339(),
    );
    (StatusCode::OK, Json(status)).into_response()
}

/// Plain health check handler.
///
/// ```text
/// GET /health
/// {"status":"healthy"}
/// ```
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "healthy".to_string(),
    })
}

/// Service information handler for `/`.
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Welcome to the Holocron Items API".to_string(),
        description: "REST API for character records held in memory".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        health: "/health".to_string(),
        metrics: "/metrics".to_string(),
    })
}
