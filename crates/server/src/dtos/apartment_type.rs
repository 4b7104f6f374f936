use chrono::{DateTime, Utc};
use database::entities::apartment_types;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApartmentTypeResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<apartment_types::Model> for ApartmentTypeResponse {
    fn from(model: apartment_types::Model) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name,
            description: model.description,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
