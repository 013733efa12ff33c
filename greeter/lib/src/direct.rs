//! Single greeting from startup parameters.

use std::io::Write;

use crate::error::GreeterError;
use crate::greeting::GreetingRequest;

/// Validates the supplied names and writes one greeting to `out`.
///
/// First and last name are checked in order. The title is passed through as
/// given, so abbreviations such as `Dr.` work. Nothing is written unless both
/// names pass.
///
/// ## Errors
///
/// - [`GreeterError::Validation`] for the first name field that fails.
/// - [`GreeterError::Io`] if writing to `out` fails.
///
/// ## Examples
///
/// ```
/// use greeter_lib::greet_direct;
///
/// let mut out = Vec::new();
/// let greeting = greet_direct("Jane", "Smith", Some("Dr."), &mut out).unwrap();
/// assert_eq!(greeting, "Hello, Dr. Jane Smith!");
/// assert_eq!(out, b"Hello, Dr. Jane Smith!\n");
/// ```
pub fn greet_direct<W: Write>(
    first: &str,
    last: &str,
    title: Option<&str>,
    out: &mut W,
) -> Result<String, GreeterError> {
    let title = title.filter(|t| !t.trim().is_empty());
    let request = GreetingRequest::parse(first, last, title)?;
    let greeting = request.greeting();
    writeln!(out, "{greeting}")?;
    out.flush()?;
    Ok(greeting)
}
