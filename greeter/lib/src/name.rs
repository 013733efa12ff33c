//! Name component validation.

use std::fmt;

use tracing::error;

use crate::error::NameError;

/// Returns `true` for characters allowed in a name component.
///
/// Letters, whitespace, apostrophes and hyphens are accepted, so
/// `"O'Brien"`, `"Mary Ann"` and `"Smith-Jones"` are all valid.
pub fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || c.is_whitespace() || c == '\'' || c == '-'
}

/// Checks that `value` is a usable name component.
///
/// The value must be non-empty after trimming and consist only of characters
/// accepted by [`is_name_char`]. Every failure is logged at ERROR with the
/// field label; the caller decides whether to re-prompt, skip or abort.
///
/// ## Examples
///
/// ```
/// use greeter_lib::validate_name;
///
/// assert!(validate_name("Jane", "First name").is_ok());
/// assert!(validate_name("   ", "First name").is_err());
/// assert!(validate_name("R2-D2", "First name").is_err());
/// ```
pub fn validate_name(value: &str, label: &str) -> Result<(), NameError> {
    if value.trim().is_empty() {
        error!(field = label, "{label} cannot be empty");
        return Err(NameError::Empty {
            field: label.to_string(),
        });
    }

    if let Some(character) = value.chars().find(|c| !is_name_char(*c)) {
        error!(field = label, ?character, "{label} contains invalid characters");
        return Err(NameError::InvalidCharacters {
            field: label.to_string(),
            character,
        });
    }

    Ok(())
}

/// A validated name component.
///
/// The value is kept exactly as supplied; validation never trims or
/// otherwise corrects it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameField(String);

impl NameField {
    /// Validates `value` and wraps it.
    ///
    /// ## Errors
    ///
    /// Returns a [`NameError`] when [`validate_name`] rejects the value.
    pub fn parse(value: impl Into<String>, label: &str) -> Result<Self, NameError> {
        let value = value.into();
        validate_name(&value, label)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for NameField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
