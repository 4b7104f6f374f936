use crate::{error::AppError, error::ErrorReport, state::AppState};
use axum::{
    Json,
    extract::{OriginalUri, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use log::{error, warn};
use std::any::Any;

/// Terminal error handler.
///
/// Every failed request passes through here: the error is logged and, outside
/// production, the body is rebuilt with the error's debug chain as `stack`.
pub async fn normalize_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(report) = response.extensions_mut().remove::<ErrorReport>() else {
        return response;
    };

    if report.status.is_server_error() {
        error!("Error {}: {}", report.status.as_u16(), report.internal);
    } else {
        warn!("Error {}: {}", report.status.as_u16(), report.internal);
    }

    if state.config.is_production() {
        return response;
    }

    (report.status, Json(report.to_body(true))).into_response()
}

/// Fallback for every unmatched path
pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("Can't find {uri} on this server"))
}

/// Turns a handler panic into a regular 500
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("Handler panicked: {detail}")).into_response()
}
