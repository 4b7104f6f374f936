use crate::{dtos::system::HealthResponse, state::AppState};
use axum::{Json, extract::State, http::StatusCode};
use chrono::{SecondsFormat, Utc};

/// Reports that the service is up and which environment it runs in
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            success: true,
            message: "Server is running successfully".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            environment: state.config.environment.clone(),
        }),
    )
}
