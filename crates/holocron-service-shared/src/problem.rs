//! RFC 9457 Problem Details for HTTP APIs.
//!
//! Provides structured error responses following the Problem Details standard.
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use holocron_lib::Error as LibError;

/// Problem type URI for payloads that fail schema validation.
pub const PROBLEM_VALIDATION_ERROR: &str = "/problems/validation-error";

/// Problem type URI for creates whose id is already taken.
pub const PROBLEM_DUPLICATE_ID: &str = "/problems/duplicate-id";

/// Problem type URI for deletes whose id does not exist.
pub const PROBLEM_ITEM_NOT_FOUND: &str = "/problems/item-not-found";

/// A single offending field in a rejected payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Canonical name of the field.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// RFC 9457 Problem Details response structure.
///
/// # Example
///
/// ```
/// use holocron_service_shared::{ProblemDetails, PROBLEM_DUPLICATE_ID};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(
///     PROBLEM_DUPLICATE_ID,
///     "Duplicate Id",
///     StatusCode::BAD_REQUEST,
/// )
/// .with_detail("Item with id 9 already exists")
/// .with_request_id("req-12345");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// URI reference identifying the specific occurrence (the request ID).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Field-level validation failures, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ProblemDetails {
    /// Create a new ProblemDetails with required fields.
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            errors: Vec::new(),
        }
    }

    /// Add a detailed explanation of this specific problem occurrence.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add the request identifier for tracing.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// Attach field-level errors.
    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = errors;
        self
    }

    /// Create a 422 Unprocessable Entity problem listing the offending fields.
    pub fn validation_failed(errors: Vec<FieldError>, request_id: impl Into<String>) -> Self {
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        let detail = format!("Invalid or missing fields: {}", fields.join(", "));

        Self::new(
            PROBLEM_VALIDATION_ERROR,
            "Validation Error",
            StatusCode::UNPROCESSABLE_ENTITY,
        )
        .with_detail(detail)
        .with_request_id(request_id)
        .with_errors(errors)
    }

    /// Create a 422 problem for a body or path that could not be parsed at all.
    pub fn unprocessable(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_VALIDATION_ERROR,
            "Validation Error",
            StatusCode::UNPROCESSABLE_ENTITY,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// Create a 400 Bad Request problem for an id that is already taken.
    pub fn duplicate_id(id: i64, request_id: impl Into<String>) -> Self {
        Self::new(PROBLEM_DUPLICATE_ID, "Duplicate Id", StatusCode::BAD_REQUEST)
            .with_detail(format!("Item with id {} already exists", id))
            .with_request_id(request_id)
    }

    /// Create a 400 Bad Request problem for an id that does not exist.
    pub fn item_not_found(id: i64, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_ITEM_NOT_FOUND,
            "Item Not Found",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(format!("Item with id {} not found", id))
        .with_request_id(request_id)
    }

}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.title,
            self.detail.as_deref().unwrap_or("")
        )
    }
}

impl std::error::Error for ProblemDetails {}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = (status, Json(&self)).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

/// Convert library errors to ProblemDetails.
///
/// The `request_id` must be provided separately since library errors don't have it.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::DuplicateId { id } => ProblemDetails::duplicate_id(*id, request_id),
        LibError::NotFound { id } => ProblemDetails::item_not_found(*id, request_id),
    }
}
