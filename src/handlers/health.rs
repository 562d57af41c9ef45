use crate::error::{ApiError, ErrorResponse};
use crate::models::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// Describes the configured DynamoDB table to verify connectivity without
/// touching any data. Returns 200 OK if the table is reachable, 503 Service
/// Unavailable otherwise. The underlying failure is logged, not returned.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = ErrorResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HealthResponse>), ApiError> {
    state.store.describe().await.map_err(ApiError::Unhealthy)?;

    tracing::debug!("Health check passed");
    Ok((
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            dynamodb: "connected".to_string(),
            secrets_loaded: state.config.secret_configured(),
            environment: state.config.environment.clone(),
        }),
    ))
}
