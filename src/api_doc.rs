use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{
    CreateItemRequest, ExternalApiStatusResponse, HealthResponse, Item, ServiceInfoResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-dynamodb-items API",
        version = "1.0.0",
        description = "CRUD over a single item collection stored in DynamoDB"
    ),
    paths(
        handlers::info::info_handler,
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::external_api::external_api_status_handler
    ),
    components(
        schemas(
            Item,
            CreateItemRequest,
            ServiceInfoResponse,
            HealthResponse,
            ExternalApiStatusResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "info", description = "Service information"),
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item operations"),
        (name = "diagnostics", description = "Configuration diagnostics")
    )
)]
pub struct ApiDoc;
