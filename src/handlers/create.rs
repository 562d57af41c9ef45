use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateItemRequest, Item};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use uuid::Uuid;

/// POST /items handler - Create an item
///
/// The body is validated before the store is touched. The id is a fresh v4
/// UUID and is written without an existence check.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Item created", body = Item),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 422, description = "Missing or invalid field", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(request) = payload?;

    if request.name.trim().is_empty() {
        return Err(ApiError::InvalidField {
            field: "name",
            message: "must not be empty".to_string(),
        });
    }

    let item = Item {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        description: request.description,
        category: request.category,
    };

    state
        .store
        .put(&item)
        .await
        .map_err(ApiError::store("Failed to create item"))?;

    tracing::info!("Created item with id: {}", item.id);
    Ok((StatusCode::OK, Json(item)))
}
