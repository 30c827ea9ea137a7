pub mod applications;
pub mod gigs;
pub mod users;

use std::fmt;

/// A single failed field from form validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Trim a required form field, recording a field error when it comes out empty.
pub(crate) fn required(
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> String {
    let value = value.unwrap_or_default().trim().to_string();
    if value.is_empty() {
        errors.push(FieldError::new(field, "This field is required."));
    }
    value
}

/// Trim an optional form field; absent and blank both come out as "".
pub(crate) fn optional(value: Option<String>) -> String {
    value.unwrap_or_default().trim().to_string()
}
