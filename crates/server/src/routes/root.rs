use crate::dtos::system::{ApiInfoResponse, EndpointIndex};
use axum::{Json, http::StatusCode};

pub const API_NAME: &str = "Crypto Immobilier API";
pub const API_VERSION: &str = "1.0.0";

/// Lists the endpoint groups this API serves
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "API information", body = ApiInfoResponse)
    ),
    tag = "Health"
)]
pub async fn api_info() -> (StatusCode, Json<ApiInfoResponse>) {
    (
        StatusCode::OK,
        Json(ApiInfoResponse {
            success: true,
            message: API_NAME.to_string(),
            version: API_VERSION.to_string(),
            endpoints: EndpointIndex {
                health: "/health".to_string(),
                api: "/api".to_string(),
                auth: "/api/auth/me".to_string(),
                reservations: "/api/reservations".to_string(),
                apartment_types: "/api/apartment-types".to_string(),
                docs: "/swagger-ui".to_string(),
            },
        }),
    )
}
