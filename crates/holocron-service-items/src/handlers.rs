//! Item endpoint handlers.
//!
//! Each handler resolves the request ID, calls into [`holocron_lib::ItemService`]
//! through [`AppState`], records business metrics, and maps the outcome to
//! either a [`ServiceResponse`] or a [`ProblemDetails`].

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::HeaderMap,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use holocron_lib::{CharacterRecord, ItemSummary, RecordId};
use holocron_service_shared::{
    AppState, Confirmation, CreateItemRequest, ProblemDetails, ServiceResponse, Validate,
    extract_or_generate_request_id, from_lib_error, record_item_created, record_item_deleted,
    record_item_rejected, record_items_listed, record_name_lookup,
};

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug)]
pub enum Response<T> {
    Success(ServiceResponse<T>),
    Error(ProblemDetails),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(data) => data.into_response(),
            Response::Error(problem) => problem.into_response(),
        }
    }
}

/// Get all items
///
/// Every stored record in insertion order, projected to id, name, height,
/// mass and birth_year.
#[utoipa::path(
    get,
    path = "/items/getAll",
    tag = "items",
    responses(
        (status = 200, description = "All items", body = [ItemSummary],
            example = json!([{
                "id": 1, "name": "Luke Skywalker", "height": 172, "mass": 77, "birth_year": null
            }])),
    )
)]
pub async fn get_all_items(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ServiceResponse<Vec<ItemSummary>> {
    let request_id = extract_or_generate_request_id(&headers);

    let items = state.items().get_all();
    record_items_listed(items.len());

    info!(request_id = %request_id, count = items.len(), "listed items");
    ServiceResponse::ok(items)
}

/// Get items by name
///
/// Full records whose name matches, ignoring case. No match yields an empty
/// list.
#[utoipa::path(
    get,
    path = "/items/get/{name}",
    tag = "items",
    params(("name" = String, Path, description = "Character name, e.g. `Luke Skywalker`")),
    responses(
        (status = 200, description = "Matching items, possibly none", body = [CharacterRecord],
            example = json!([{
                "id": 1, "name": "Luke Skywalker", "height": 172, "mass": 77,
                "hair_color": "blond", "skin_color": "fair", "eye_color": "blue",
                "birth_year": null
            }])),
    )
)]
pub async fn get_items_by_name(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> ServiceResponse<Vec<CharacterRecord>> {
    let request_id = extract_or_generate_request_id(&headers);

    let items = state.items().get_by_name(&name);
    record_name_lookup(items.len());

    info!(
        request_id = %request_id,
        name = %name,
        matches = items.len(),
        "looked up items by name"
    );
    ServiceResponse::ok(items)
}

/// Add a new item
///
/// Every field except birth_year is required. The id is chosen by the client
/// and must not already exist.
#[utoipa::path(
    post,
    path = "/items/add",
    tag = "items",
    request_body = CharacterRecord,
    responses(
        (status = 201, description = "Item created", body = CharacterRecord),
        (status = 400, description = "An item with this id already exists",
            body = ProblemDetails, content_type = "application/problem+json"),
        (status = 422, description = "Missing fields, wrong types or unreadable JSON",
            body = ProblemDetails, content_type = "application/problem+json"),
    )
)]
pub async fn add_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Response<CharacterRecord> {
    let request_id = extract_or_generate_request_id(&headers);

    let request = match body {
        Ok(Json(body)) => CreateItemRequest::new(body),
        Err(rejection) => {
            warn!(request_id = %request_id, error = %rejection, "unreadable item payload");
            record_item_rejected("validation_error");
            return Response::Error(ProblemDetails::unprocessable(
                rejection.body_text(),
                request_id.as_str(),
            ));
        }
    };

    if let Err(problem) = request.validate(request_id.as_str()) {
        warn!(
            request_id = %request_id,
            detail = problem.detail.as_deref().unwrap_or(""),
            "item payload failed validation"
        );
        record_item_rejected("validation_error");
        return Response::Error(*problem);
    }

    let record = match request.into_record() {
        Ok(record) => record,
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "item payload failed to decode");
            record_item_rejected("validation_error");
            return Response::Error(ProblemDetails::unprocessable(
                e.to_string(),
                request_id.as_str(),
            ));
        }
    };

    match state.items().add(record) {
        Ok(stored) => {
            record_item_created();
            info!(request_id = %request_id, id = stored.id, name = %stored.name, "item added");
            Response::Success(ServiceResponse::created(stored))
        }
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "item add rejected");
            record_item_rejected("duplicate_id");
            Response::Error(from_lib_error(&e, request_id.as_str()))
        }
    }
}

/// Delete an item by id
#[utoipa::path(
    delete,
    path = "/items/delete/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Id of the item to delete")),
    responses(
        (status = 200, description = "Item deleted", body = Confirmation),
        (status = 400, description = "No item has this id",
            body = ProblemDetails, content_type = "application/problem+json"),
        (status = 422, description = "The id is not an integer",
            body = ProblemDetails, content_type = "application/problem+json"),
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<RecordId>, PathRejection>,
) -> Response<Confirmation> {
    let request_id = extract_or_generate_request_id(&headers);

    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            warn!(request_id = %request_id, error = %rejection, "invalid item id in path");
            record_item_rejected("validation_error");
            return Response::Error(ProblemDetails::unprocessable(
                rejection.body_text(),
                request_id.as_str(),
            ));
        }
    };

    match state.items().delete_by_id(id) {
        Ok(removed) => {
            record_item_deleted();
            info!(request_id = %request_id, id, name = %removed.name, "item deleted");
            Response::Success(ServiceResponse::ok(Confirmation::deleted(id)))
        }
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "item delete rejected");
            record_item_rejected("not_found");
            Response::Error(from_lib_error(&e, request_id.as_str()))
        }
    }
}
