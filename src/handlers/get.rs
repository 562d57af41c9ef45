use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /items/{id} handler - Retrieve one item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    match state
        .store
        .get(&id)
        .await
        .map_err(ApiError::store("Failed to retrieve item"))?
    {
        Some(item) => {
            tracing::info!("Retrieved item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found with id: {}", id);
            Err(ApiError::ItemNotFound)
        }
    }
}
