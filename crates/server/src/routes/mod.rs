pub mod apartment_type;
pub mod auth;
pub mod health;
pub mod reservation;
pub mod root;

use crate::error::AppError;
use uuid::Uuid;

/// Parses a path id; anything that is not a UUID cannot name a stored record
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::NotFound(format!("{entity} not found with id {raw}")))
}
