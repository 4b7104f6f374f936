use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    /// RFC 3339 time the check was served
    pub timestamp: String,
    pub environment: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfoResponse {
    pub success: bool,
    pub message: String,
    pub version: String,
    pub endpoints: EndpointIndex,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EndpointIndex {
    pub health: String,
    pub api: String,
    pub auth: String,
    pub reservations: String,
    pub apartment_types: String,
    pub docs: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IdentityResponse {
    /// Subject of the verified token
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
