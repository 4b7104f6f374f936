use serde::Serialize;
use thiserror::Error;

/// A single rule broken by an input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field name as it appears in the JSON payload
    pub field: &'static str,
    pub message: String,
}

/// Every violation found while validating one payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("Validation failed: {}", summarize(.violations))]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an error for a single field
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Names of the offending fields, in the order they were checked
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }

    /// Returns `Ok(value)` when nothing was recorded
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Trims a required text field and checks it against `max_len` characters.
///
/// Missing and blank values are both reported as "<label> is required".
pub(crate) fn required_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: Option<String>,
    max_len: usize,
) -> String {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();

    if value.is_empty() {
        errors.push(field, format!("{label} is required"));
    } else {
        check_length(errors, field, label, &value, max_len);
    }

    value
}

/// Trims an optional text field; blank values collapse to `None`
pub(crate) fn optional_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())?;

    check_length(errors, field, label, &value, max_len);
    Some(value)
}

fn check_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: &str,
    max_len: usize,
) {
    if value.chars().count() > max_len {
        errors.push(field, format!("{label} cannot exceed {max_len} characters"));
    }
}
