//! Holocron items HTTP microservice.
//!
//! This service provides a REST API over the in-memory character record
//! store.
//!
//! # Endpoints
//!
//! - `GET /items/getAll` - List every record (id, name, height, mass, birth_year)
//! - `GET /items/get/{name}` - Full records whose name matches, ignoring case
//! - `POST /items/add` - Create a record with a client-supplied id
//! - `DELETE /items/delete/{id}` - Remove a record by id
//! - `GET /` - Service information
//! - `GET /health` - Plain health check
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /openapi.json` - OpenAPI document for the item endpoints

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use holocron_service_shared::{
    AppState, MetricsLayer, health_check, health_live, health_ready, metrics_handler,
    service_info,
};

pub mod config;
pub mod handlers;
pub mod openapi;

pub use config::ServiceConfig;
pub use openapi::ApiDoc;

/// Build the service router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .route("/metrics", get(metrics_handler))
        .route("/openapi.json", get(openapi::openapi_json))
        .route("/items/getAll", get(handlers::get_all_items))
        .route("/items/get/{name}", get(handlers::get_items_by_name))
        .route("/items/add", post(handlers::add_item))
        .route("/items/delete/{id}", delete(handlers::delete_item))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(MetricsLayer)
        .with_state(state)
}
