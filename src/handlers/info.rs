use crate::models::ServiceInfoResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub const WELCOME_MESSAGE: &str = "Welcome to 32co Application";

/// GET / handler - Service info
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service is running", body = ServiceInfoResponse)
    ),
    tag = "info"
)]
pub async fn info_handler(State(state): State<AppState>) -> (StatusCode, Json<ServiceInfoResponse>) {
    (
        StatusCode::OK,
        Json(ServiceInfoResponse {
            message: WELCOME_MESSAGE.to_string(),
            status: "running".to_string(),
            environment: state.config.environment.clone(),
            external_api_configured: state.config.secret_configured(),
        }),
    )
}
