//! Response wrappers for successful HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A successful JSON payload paired with its status code.
///
/// This mirrors `ProblemDetails` on the success side, so handlers can return
/// either through one response enum.
///
/// # Example
///
/// ```
/// use holocron_service_shared::ServiceResponse;
///
/// let ok = ServiceResponse::ok(vec![1, 2, 3]);
/// let created = ServiceResponse::created("Yoda");
/// assert_eq!(ok.status.as_u16(), 200);
/// assert_eq!(created.status.as_u16(), 201);
/// ```
#[derive(Debug, Clone)]
pub struct ServiceResponse<T> {
    /// The response payload, serialized as the whole body.
    pub data: T,

    /// Status code for this response.
    pub status: StatusCode,
}

impl<T> ServiceResponse<T> {
    /// Create a 200 OK response.
    pub fn ok(data: T) -> Self {
        Self::with_status(data, StatusCode::OK)
    }

    /// Create a 201 Created response.
    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }

    pub fn with_status(data: T, status: StatusCode) -> Self {
        Self { data, status }
    }
}

impl<T> From<T> for ServiceResponse<T> {
    fn from(data: T) -> Self {
        Self::ok(data)
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.data)).into_response()
    }
}

/// Confirmation body for operations that return no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Confirmation {
    #[schema(example = "Item with id 1 deleted successfully")]
    pub detail: String,
}

impl Confirmation {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Confirmation for a deleted record.
    pub fn deleted(id: i64) -> Self {
        Self::new(format!("Item with id {} deleted successfully", id))
    }
}
