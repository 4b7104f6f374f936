use chrono::{DateTime, Utc};
use database::entities::reservations;
use models::reservation_status::ReservationStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: String,
    pub name: String,
    pub number: String,
    pub message: String,
    pub apartment_type: String,
    pub date: DateTime<Utc>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<reservations::Model> for ReservationResponse {
    fn from(model: reservations::Model) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name,
            number: model.number,
            message: model.message,
            apartment_type: model.apartment_type,
            date: model.date,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReservationQueryParams {
    /// Only return reservations with this status
    pub status: Option<ReservationStatus>,
}
