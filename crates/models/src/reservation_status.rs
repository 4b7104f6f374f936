use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[cfg(feature = "database")]
use sea_orm::Value;

/// Where a reservation sits in the staff workflow
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
pub enum ReservationStatus {
    /// Submitted by a client, not yet handled
    #[default]
    Pending,
    /// Handled by staff
    Done,
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for ReservationStatus {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => s.parse().map_err(|_| sea_orm::sea_query::ValueTypeErr),
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "ReservationStatus".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::String(sea_orm::sea_query::StringLen::N(16))
    }
}

#[cfg(feature = "database")]
impl From<ReservationStatus> for Value {
    fn from(status: ReservationStatus) -> Self {
        Value::String(Some(Box::new(status.to_string())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for ReservationStatus {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        val.parse().map_err(|e| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Failed to parse ReservationStatus from {val:?}: {e}"
            )))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for ReservationStatus {
    fn null() -> Value {
        Value::String(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_names_only() {
        assert_eq!(
            "Pending".parse::<ReservationStatus>().ok(),
            Some(ReservationStatus::Pending)
        );
        assert_eq!(
            "Done".parse::<ReservationStatus>().ok(),
            Some(ReservationStatus::Done)
        );
        assert!("done".parse::<ReservationStatus>().is_err());
        assert!("Cancelled".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn defaults_to_pending() {
        assert_eq!(ReservationStatus::default(), ReservationStatus::Pending);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ReservationStatus::Done).unwrap();
        assert_eq!(json, "\"Done\"");
    }
}
