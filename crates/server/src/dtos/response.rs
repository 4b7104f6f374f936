use models::validation::FieldViolation;
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for every successful response
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Number of items in `data` for list responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            count: None,
            message: Some(message.into()),
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn list(items: Vec<T>) -> Self {
        Self {
            count: Some(items.len()),
            ..Self::data(items)
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    /// Per-field violations for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolationResponse>>,
    /// Only present outside production
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldViolationResponse {
    pub field: String,
    pub message: String,
}

impl From<&FieldViolation> for FieldViolationResponse {
    fn from(violation: &FieldViolation) -> Self {
        Self {
            field: violation.field.to_string(),
            message: violation.message.clone(),
        }
    }
}
