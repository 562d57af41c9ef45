use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /items handler - List all items
///
/// Returns whatever a single table scan yields, in store order. There is no
/// pagination: a table larger than one scan page is truncated.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items", body = [Item]),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Item>>), ApiError> {
    let items = state
        .store
        .scan()
        .await
        .map_err(ApiError::store("Failed to retrieve items"))?;

    tracing::info!("Listed {} items", items.len());
    Ok((StatusCode::OK, Json(items)))
}
