//! Client-side form validation errors.

use std::fmt;

/// A single rejected form field.
///
/// Produced before any request is built, so a validation failure never
/// reaches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Wire name of the offending field (`title`, `imageUrl`, ...).
    pub field: &'static str,
    /// Message shown next to the field.
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }

    /// Shorthand for the "X is required" family of errors.
    pub fn required(field: &'static str, message: &'static str) -> Self {
        Self::new(field, message)
    }

    pub fn error_code(&self) -> &'static str {
        "E_VALIDATION"
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = ValidationError::required("title", "Title is required");
        assert_eq!(err.to_string(), "Title is required");
        assert_eq!(err.field, "title");
    }
}
