//! Request types and validation for HTTP endpoints.

use serde_json::{Map, Value};

use holocron_lib::CharacterRecord;

use crate::problem::{FieldError, ProblemDetails};

/// Validation trait for request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Expected JSON type of a payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Integer,
    String,
    OptionalString,
}

/// Schema of a [`CharacterRecord`] payload: canonical name, accepted alias,
/// expected kind.
const RECORD_SCHEMA: &[(&str, Option<&str>, FieldKind)] = &[
    ("id", None, FieldKind::Integer),
    ("name", None, FieldKind::String),
    ("height", None, FieldKind::Integer),
    ("mass", None, FieldKind::Integer),
    ("hair_color", Some("hairColor"), FieldKind::String),
    ("skin_color", Some("skinColor"), FieldKind::String),
    ("eye_color", Some("eyeColor"), FieldKind::String),
    ("birth_year", Some("birthYear"), FieldKind::OptionalString),
];

fn check_field(
    object: &Map<String, Value>,
    name: &str,
    alias: Option<&str>,
    kind: FieldKind,
) -> Option<FieldError> {
    let aliased = alias.and_then(|a| object.get(a));
    if object.contains_key(name) && aliased.is_some() {
        return Some(FieldError::new(name, "supplied under both names"));
    }
    let value = object.get(name).or(aliased);

    let message = match (kind, value) {
        (FieldKind::OptionalString, None | Some(Value::Null | Value::String(_))) => return None,
        (FieldKind::OptionalString, Some(_)) => "must be a string or null",
        (_, None) => "field required",
        (FieldKind::Integer, Some(Value::Number(n))) if n.is_i64() => return None,
        (FieldKind::Integer, Some(_)) => "must be an integer",
        (FieldKind::String, Some(Value::String(_))) => return None,
        (FieldKind::String, Some(_)) => "must be a string",
    };

    Some(FieldError::new(name, message))
}

/// Request body for creating a character record.
///
/// Wraps the raw JSON so that every offending field can be reported at once,
/// including type mismatches that a typed deserializer would stop at.
#[derive(Debug, Clone)]
pub struct CreateItemRequest {
    body: Value,
}

impl CreateItemRequest {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// All schema violations in the body, in schema order.
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self.body.as_object() {
            Some(object) => RECORD_SCHEMA
                .iter()
                .filter_map(|&(name, alias, kind)| check_field(object, name, alias, kind))
                .collect(),
            None => vec![FieldError::new("body", "must be a JSON object")],
        }
    }

    /// Convert a validated body into a record.
    ///
    /// Call [`Validate::validate`] first; an unvalidated body may fail here
    /// with the deserializer's first error only.
    pub fn into_record(self) -> Result<CharacterRecord, serde_json::Error> {
        serde_json::from_value(self.body)
    }

    /// The `id` field, if present and integral.
    pub fn id(&self) -> Option<i64> {
        self.body.get("id").and_then(Value::as_i64)
    }
}

impl From<Value> for CreateItemRequest {
    fn from(body: Value) -> Self {
        Self::new(body)
    }
}

impl Validate for CreateItemRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Box::new(ProblemDetails::validation_failed(errors, request_id)))
        }
    }
}
