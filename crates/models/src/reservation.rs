use crate::{
    reservation_status::ReservationStatus,
    validation::{ValidationErrors, required_text},
};
use serde::Deserialize;

pub const NAME_MAX_LEN: usize = 100;
pub const NUMBER_MAX_LEN: usize = 20;
pub const MESSAGE_MAX_LEN: usize = 1000;
pub const APARTMENT_TYPE_MAX_LEN: usize = 50;

/// Raw reservation submission as received from a client.
///
/// Every field is optional here so that missing fields surface as validation
/// violations rather than deserialization failures.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayload {
    pub name: Option<String>,
    pub number: Option<String>,
    pub message: Option<String>,
    pub apartment_type: Option<String>,
}

/// A reservation submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub name: String,
    pub number: String,
    pub message: String,
    pub apartment_type: String,
}

impl ReservationPayload {
    pub fn validate(self) -> Result<NewReservation, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(&mut errors, "name", "Name", self.name, NAME_MAX_LEN);
        let number = required_text(
            &mut errors,
            "number",
            "Phone number",
            self.number,
            NUMBER_MAX_LEN,
        );
        let message = required_text(
            &mut errors,
            "message",
            "Message",
            self.message,
            MESSAGE_MAX_LEN,
        );
        let apartment_type = required_text(
            &mut errors,
            "apartmentType",
            "Apartment type",
            self.apartment_type,
            APARTMENT_TYPE_MAX_LEN,
        );

        errors.into_result(NewReservation {
            name,
            number,
            message,
            apartment_type,
        })
    }
}

/// Body of a status update request
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusPayload {
    pub status: Option<String>,
}

impl StatusPayload {
    pub fn validate(self) -> Result<ReservationStatus, ValidationErrors> {
        let Some(raw) = self.status else {
            return Err(ValidationErrors::single("status", "Status is required"));
        };

        raw.trim().parse().map_err(|_| {
            ValidationErrors::single(
                "status",
                format!("`{raw}` is not a valid status, expected Pending or Done"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ReservationPayload {
        ReservationPayload {
            name: Some("Jane".into()),
            number: Some("555-1234".into()),
            message: Some("Interested".into()),
            apartment_type: Some("2BR".into()),
        }
    }

    #[test]
    fn valid_payload_passes() {
        let reservation = payload().validate().unwrap();
        assert_eq!(reservation.name, "Jane");
        assert_eq!(reservation.apartment_type, "2BR");
    }

    #[test]
    fn empty_payload_reports_every_field() {
        let errors = ReservationPayload::default().validate().unwrap_err();
        assert_eq!(
            errors.fields(),
            vec!["name", "number", "message", "apartmentType"]
        );
    }

    #[test]
    fn oversized_fields_are_rejected() {
        let errors = ReservationPayload {
            number: Some("1".repeat(NUMBER_MAX_LEN + 1)),
            message: Some("m".repeat(MESSAGE_MAX_LEN + 1)),
            ..payload()
        }
        .validate()
        .unwrap_err();

        assert_eq!(errors.fields(), vec!["number", "message"]);
        assert_eq!(
            errors.violations()[0].message,
            "Phone number cannot exceed 20 characters"
        );
    }

    #[test]
    fn name_and_apartment_type_limits() {
        let errors = ReservationPayload {
            name: Some("n".repeat(NAME_MAX_LEN + 1)),
            apartment_type: Some("a".repeat(APARTMENT_TYPE_MAX_LEN + 1)),
            ..payload()
        }
        .validate()
        .unwrap_err();

        assert_eq!(errors.fields(), vec!["name", "apartmentType"]);
        assert_eq!(
            errors.violations()[0].message,
            "Name cannot exceed 100 characters"
        );

        let reservation = ReservationPayload {
            name: Some("n".repeat(NAME_MAX_LEN)),
            ..payload()
        }
        .validate()
        .unwrap();
        assert_eq!(reservation.name.len(), NAME_MAX_LEN);
    }

    #[test]
    fn limits_apply_after_trimming() {
        let reservation = ReservationPayload {
            apartment_type: Some(format!("  {}  ", "a".repeat(APARTMENT_TYPE_MAX_LEN))),
            ..payload()
        }
        .validate()
        .unwrap();

        assert_eq!(reservation.apartment_type.len(), APARTMENT_TYPE_MAX_LEN);
    }

    #[test]
    fn status_payload_parses_known_statuses() {
        let status = StatusPayload {
            status: Some("Done".into()),
        }
        .validate()
        .unwrap();
        assert_eq!(status, ReservationStatus::Done);
    }

    #[test]
    fn status_payload_rejects_missing_and_unknown() {
        assert!(StatusPayload::default().validate().is_err());

        let errors = StatusPayload {
            status: Some("Archived".into()),
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.fields(), vec!["status"]);
    }
}
