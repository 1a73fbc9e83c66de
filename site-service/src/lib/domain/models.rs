use std::fmt;

use crate::domain::errors::TextError;

/// Non-empty, trimmed text with an upper bound on its length in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredText(String);

impl RequiredText {
    /// Validate a raw field value.
    ///
    /// # Arguments
    /// * `field` - Field name used in error messages
    /// * `raw` - Raw value, trimmed before validation
    /// * `max` - Maximum length in characters
    ///
    /// # Errors
    /// * `Missing` - Value is empty after trimming
    /// * `TooLong` - Value exceeds `max` characters
    pub fn new(field: &'static str, raw: String, max: usize) -> Result<Self, TextError> {
        let trimmed = raw.trim();
        let actual = trimmed.chars().count();

        if actual == 0 {
            return Err(TextError::Missing { field });
        }
        if actual > max {
            return Err(TextError::TooLong { field, max, actual });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Rebuild from a value that was validated before it was stored.
    pub fn from_trusted(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequiredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Trim an optional free-text value, treating blank input as absent.
pub fn optional_text(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
