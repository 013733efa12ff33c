//! Choosing which driver handles an invocation.

use std::path::PathBuf;

use tracing::debug;

use crate::error::GreeterError;

pub(crate) const MISSING_NAME_USAGE: &str =
    "Both --first-name and --last-name are required for direct mode";

/// The driver selected for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Greet every record in a file.
    File(PathBuf),
    /// Greet one person from startup parameters.
    Direct {
        first: String,
        last: String,
        title: Option<String>,
    },
    /// Prompt for names until the user quits.
    Interactive,
}

impl Mode {
    /// Picks a mode from the startup parameters.
    ///
    /// A file wins over names; both names select direct mode; no names
    /// selects interactive mode. Empty names count as not supplied. A title
    /// only applies to direct mode and is otherwise logged and dropped.
    ///
    /// ## Errors
    ///
    /// Returns [`GreeterError::Usage`] when exactly one of first and last
    /// name is supplied without a file.
    ///
    /// ## Examples
    ///
    /// ```
    /// use greeter_lib::Mode;
    ///
    /// assert_eq!(Mode::select(None, None, None, None).unwrap(), Mode::Interactive);
    /// assert!(Mode::select(Some("Jane".into()), None, None, None).is_err());
    /// ```
    pub fn select(
        first: Option<String>,
        last: Option<String>,
        title: Option<String>,
        file: Option<PathBuf>,
    ) -> Result<Self, GreeterError> {
        if let Some(path) = file {
            ignore_title(title.as_deref(), "file");
            return Ok(Self::File(path));
        }

        let first = first.filter(|s| !s.is_empty());
        let last = last.filter(|s| !s.is_empty());

        match (first, last) {
            (Some(first), Some(last)) => Ok(Self::Direct { first, last, title }),
            (None, None) => {
                ignore_title(title.as_deref(), "interactive");
                Ok(Self::Interactive)
            }
            _ => Err(GreeterError::Usage(MISSING_NAME_USAGE.to_string())),
        }
    }
}

/// File records and interactive answers carry their own titles.
fn ignore_title(title: Option<&str>, mode: &str) {
    if let Some(title) = title {
        debug!(title, mode, "Ignoring --title outside direct mode");
    }
}
