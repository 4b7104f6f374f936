//! Error types and HTTP response handling.
//!
//! `AppError` is the closed set of failures a handler can end with. Each
//! variant maps to exactly one status code. Converting it into a response
//! writes the public `{success:false, error:{message}}` body and attaches an
//! [`ErrorReport`] so the terminal error middleware can log it and enrich the
//! body outside production.

pub mod auth;
pub mod config;

use crate::{
    dtos::response::{ErrorBody, ErrorResponse, FieldViolationResponse},
    error::auth::AuthError,
};
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::StoreError;
use models::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing, malformed, invalid or expired credential. 401.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// One or more payload fields broke their rules. 400.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Request could not be read at all, e.g. malformed JSON. 400.
    #[error("{0}")]
    BadRequest(String),

    /// Unknown id or unmatched route. 404.
    #[error("{0}")]
    NotFound(String),

    /// Persistence failure. 500.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    /// Any other unexpected failure. 500.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to clients; server errors never leak their details
    fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(errors) => Self::Validation(errors),
            err @ StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
            StoreError::Db(err) => Self::Db(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Everything the terminal error middleware needs to know about a failed request
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub status: StatusCode,
    /// Message returned to the client
    pub message: String,
    /// Full error text, for logs
    pub internal: String,
    /// Debug rendering of the error chain
    pub stack: String,
    pub details: Option<Vec<FieldViolationResponse>>,
}

impl ErrorReport {
    pub fn to_body(&self, include_stack: bool) -> ErrorResponse {
        ErrorResponse {
            success: false,
            error: ErrorBody {
                message: self.message.clone(),
                details: self.details.clone(),
                stack: include_stack.then(|| self.stack.clone()),
            },
        }
    }
}

impl From<&AppError> for ErrorReport {
    fn from(err: &AppError) -> Self {
        let details = match err {
            AppError::Validation(errors) => Some(
                errors
                    .violations()
                    .iter()
                    .map(FieldViolationResponse::from)
                    .collect(),
            ),
            _ => None,
        };

        Self {
            status: err.status_code(),
            message: err.public_message(),
            internal: err.to_string(),
            stack: format!("{err:?}"),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let report = ErrorReport::from(&self);

        let mut response = (report.status, Json(report.to_body(false))).into_response();
        response.extensions_mut().insert(report);
        response
    }
}
