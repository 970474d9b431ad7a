//! Shared infrastructure for Holocron HTTP microservices.
//!
//! This crate provides common functionality used across microservice binaries:
//!
//! - [`AppState`]: The seeded item service, shared by all handlers
//! - [`health`]: Health check and service information handlers
//! - [`ProblemDetails`]: RFC 9457 Problem Details for consistent error responses
//! - [`ServiceResponse`]: Wrapper for successful responses with a status code
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request ID and metrics middleware
//! - [`CreateItemRequest`]: Field-level validation for creation payloads
//!
//! # Architecture
//!
//! Services follow a thin-handler pattern where all business logic resides
//! in `holocron-lib`. This crate provides only HTTP glue:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Parse request JSON                                       │
//! │  - Validate fields                                          │
//! │  - Call holocron-lib ItemService                            │
//! │  - Format response                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides fresh state and payload fixtures for
//! handler testing. Enable the `test-utils` feature to access it from
//! dependent crates.

pub mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use health::{health_check, health_live, health_ready, service_info, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_item_created, record_item_deleted,
    record_item_rejected, record_items_listed, record_name_lookup, MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId};
pub use problem::{
    from_lib_error, FieldError, ProblemDetails, PROBLEM_DUPLICATE_ID, PROBLEM_ITEM_NOT_FOUND,
    PROBLEM_VALIDATION_ERROR,
};
pub use request::{CreateItemRequest, Validate};
pub use response::{Confirmation, ServiceResponse};
pub use state::AppState;
