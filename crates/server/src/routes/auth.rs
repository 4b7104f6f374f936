use crate::{
    auth::Claims,
    dtos::{
        response::{ApiResponse, ErrorResponse},
        system::IdentityResponse,
    },
};
use axum::{Extension, Json};

/// Returns the identity carried by the caller's verified token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Successfully authenticated", body = ApiResponse<IdentityResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT", body = ErrorResponse)
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Authentication"
)]
pub async fn me(Extension(claims): Extension<Claims>) -> Json<ApiResponse<IdentityResponse>> {
    Json(ApiResponse::data(IdentityResponse {
        sub: claims.sub,
        email: claims.email,
    }))
}
