//! OpenAPI document for the item endpoints.

use axum::Json;
use utoipa::OpenApi;

use holocron_lib::{CharacterRecord, ItemSummary};
use holocron_service_shared::{Confirmation, FieldError, ProblemDetails};

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Holocron Items API",
        description = "In-memory CRUD over Star Wars character records."
    ),
    paths(
        handlers::get_all_items,
        handlers::get_items_by_name,
        handlers::add_item,
        handlers::delete_item,
    ),
    components(schemas(CharacterRecord, ItemSummary, Confirmation, ProblemDetails, FieldError)),
    tags((name = "items", description = "Character record operations"))
)]
pub struct ApiDoc;

/// Handle GET /openapi.json requests.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> serde_json::Value {
        serde_json::to_value(ApiDoc::openapi()).expect("document serializes")
    }

    #[test]
    fn test_document_lists_item_operations() {
        let doc = document();
        let paths = &doc["paths"];

        assert!(paths["/items/getAll"]["get"].is_object());
        assert!(paths["/items/get/{name}"]["get"].is_object());
        assert!(paths["/items/add"]["post"].is_object());
        assert!(paths["/items/delete/{id}"]["delete"].is_object());
    }

    #[test]
    fn test_add_documents_every_status() {
        let doc = document();
        let responses = &doc["paths"]["/items/add"]["post"]["responses"];

        for status in ["201", "400", "422"] {
            assert!(responses[status].is_object(), "missing {status}");
        }
        assert!(
            responses["400"]["content"]["application/problem+json"].is_object(),
            "problem responses use problem+json"
        );
    }

    #[test]
    fn test_record_schema_uses_wire_names() {
        let doc = document();
        let record = &doc["components"]["schemas"]["CharacterRecord"];

        assert_eq!(record["properties"]["id"]["type"], "integer");
        assert!(record["properties"]["hair_color"].is_object());
        assert!(record["properties"]["hairColor"].is_null());

        let required: Vec<&str> = record["required"]
            .as_array()
            .expect("required list")
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"eye_color"));
        assert!(!required.contains(&"birth_year"));
    }

    #[test]
    fn test_problem_schema_uses_type_key() {
        let doc = document();
        let problem = &doc["components"]["schemas"]["ProblemDetails"];
        assert!(problem["properties"]["type"].is_object());
        assert!(problem["properties"]["type_uri"].is_null());
    }
}
