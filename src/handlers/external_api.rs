use crate::error::{ApiError, ErrorResponse};
use crate::models::ExternalApiStatusResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

const MASK: &str = "***";
const VISIBLE_PREFIX: usize = 4;

/// GET /external-api-status handler - Report whether the external API key is set
///
/// Diagnostic only: returns the key's length and a masked prefix, never the key.
#[utoipa::path(
    get,
    path = routes::EXTERNAL_API_STATUS,
    responses(
        (status = 200, description = "Key is configured", body = ExternalApiStatusResponse),
        (status = 503, description = "Key is not configured", body = ErrorResponse)
    ),
    tag = "diagnostics"
)]
pub async fn external_api_status_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ExternalApiStatusResponse>), ApiError> {
    let key = state
        .config
        .external_api_key
        .as_deref()
        .ok_or(ApiError::NotConfigured("External API key not configured"))?;

    Ok((
        StatusCode::OK,
        Json(ExternalApiStatusResponse {
            status: "External API key is configured".to_string(),
            key_length: key.chars().count(),
            key_prefix: mask_key(key),
        }),
    ))
}

/// First four characters followed by a fixed mask, or only the mask when the
/// key is too short to show anything.
fn mask_key(key: &str) -> String {
    if key.chars().count() > VISIBLE_PREFIX {
        let prefix: String = key.chars().take(VISIBLE_PREFIX).collect();
        format!("{}{}", prefix, MASK)
    } else {
        MASK.to_string()
    }
}
