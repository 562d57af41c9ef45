use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::error::ApiError;
use crate::handlers::{
    create_handler, external_api_status_handler, get_handler, health_handler, info_handler,
    list_handler,
};
use crate::routes;
use crate::state::AppState;

/// Build the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let request_timeout = state.config.request_timeout;

    Router::new()
        .route(routes::ROOT, get(info_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::ITEMS, get(list_handler).post(create_handler))
        .route(routes::ITEM, get(get_handler))
        .route(routes::EXTERNAL_API_STATUS, get(external_api_status_handler))
        .merge(SwaggerUi::new(routes::DOCS).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
