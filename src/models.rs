use serde::{Deserialize, Serialize};

/// A stored item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Request body for creating an item
///
/// The id is always generated by the service, so it is not part of the body.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Response type for the service info endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub status: String,
    pub environment: String,
    pub external_api_configured: bool,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub dynamodb: String,
    pub secrets_loaded: bool,
    pub environment: String,
}

/// Response type for the external API key diagnostic endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ExternalApiStatusResponse {
    pub status: String,
    pub key_length: usize,
    pub key_prefix: String,
}
