use models::validation::ValidationErrors;
use sea_orm::DbErr;
use thiserror::Error;

/// Failures surfaced by the record stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input broke one or more field rules; nothing was written
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("{entity} not found with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Db(#[from] DbErr),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
