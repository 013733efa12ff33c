//! Greeting formatting.

use tracing::{debug, info};

use crate::error::NameError;
use crate::name::NameField;

/// Formats the greeting for an already-validated name.
///
/// A title that is empty after trimming is treated as absent. Parts are
/// joined with single spaces and nothing is re-cased.
///
/// ## Examples
///
/// ```
/// use greeter_lib::format_greeting;
///
/// assert_eq!(format_greeting("Jane", "Smith", None), "Hello, Jane Smith!");
/// assert_eq!(format_greeting("Jane", "Smith", Some("Dr.")), "Hello, Dr. Jane Smith!");
/// ```
pub fn format_greeting(first: &str, last: &str, title: Option<&str>) -> String {
    match title.filter(|t| !t.trim().is_empty()) {
        Some(title) => format!("Hello, {title} {first} {last}!"),
        None => format!("Hello, {first} {last}!"),
    }
}

/// A single greeting attempt with validated first and last names.
///
/// The title is held as given. The interactive loop validates it before
/// building the request; direct parameters and batch files pass it through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingRequest {
    pub first: NameField,
    pub last: NameField,
    pub title: Option<String>,
}

impl GreetingRequest {
    pub fn new(first: NameField, last: NameField, title: Option<String>) -> Self {
        Self { first, last, title }
    }

    /// Validates first, then last name, and builds a request.
    ///
    /// Validation stops at the first failing field, so only that field is
    /// logged.
    pub fn parse(first: &str, last: &str, title: Option<&str>) -> Result<Self, NameError> {
        let first = NameField::parse(first, "First name")?;
        let last = NameField::parse(last, "Last name")?;
        Ok(Self::new(first, last, title.map(str::to_string)))
    }

    /// Produces the greeting text.
    pub fn greeting(&self) -> String {
        debug!(first = %self.first, last = %self.last, "Generating greeting");
        let greeting = format_greeting(
            self.first.as_str(),
            self.last.as_str(),
            self.title.as_deref(),
        );
        info!("Generated greeting: {greeting}");
        greeting
    }
}
