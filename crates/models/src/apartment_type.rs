use crate::validation::{ValidationErrors, optional_text, required_text};
use serde::Deserialize;

pub const NAME_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Raw apartment type body, used for both create and partial update
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApartmentTypePayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApartmentType {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Fields to overwrite on an existing apartment type; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApartmentTypeChanges {
    pub name: Option<String>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl ApartmentTypePayload {
    pub fn validate_new(self) -> Result<NewApartmentType, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(&mut errors, "name", "Name", self.name, NAME_MAX_LEN);
        let description = optional_text(
            &mut errors,
            "description",
            "Description",
            self.description,
            DESCRIPTION_MAX_LEN,
        );

        errors.into_result(NewApartmentType {
            name,
            description,
            is_active: self.is_active.unwrap_or(true),
        })
    }

    pub fn validate_changes(self) -> Result<ApartmentTypeChanges, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self
            .name
            .map(|name| required_text(&mut errors, "name", "Name", Some(name), NAME_MAX_LEN));
        let description = self.description.map(|description| {
            optional_text(
                &mut errors,
                "description",
                "Description",
                Some(description),
                DESCRIPTION_MAX_LEN,
            )
        });

        errors.into_result(ApartmentTypeChanges {
            name,
            description,
            is_active: self.is_active,
        })
    }
}

impl ApartmentTypeChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.is_active.is_none()
    }
}
