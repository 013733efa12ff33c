//! Error types for the greeter library.

use std::path::PathBuf;

use thiserror::Error;

/// Why a name component was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The value was empty or only whitespace.
    #[error("{field} cannot be empty")]
    Empty {
        /// Human-readable label of the rejected field.
        field: String,
    },

    /// The value contained a character outside letters, whitespace, `'` and `-`.
    #[error("{field} contains invalid characters")]
    InvalidCharacters {
        /// Human-readable label of the rejected field.
        field: String,
        /// The first offending character.
        character: char,
    },
}

impl NameError {
    /// The label of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            Self::Empty { field } | Self::InvalidCharacters { field, .. } => field,
        }
    }
}

/// Errors surfaced by the greeting drivers.
#[derive(Debug, Error)]
pub enum GreeterError {
    /// A name component failed validation.
    #[error(transparent)]
    Validation(#[from] NameError),

    /// The invocation parameters conflict or are incomplete.
    #[error("{0}")]
    Usage(String),

    /// The batch input file does not exist.
    #[error("File '{}' not found", path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// Reading input or writing output failed.
    #[error("{source}")]
    Io {
        /// The file being read, when the failure came from batch input.
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },
}

impl GreeterError {
    /// Process exit status for this error.
    ///
    /// Bad parameters are fatal to the process. A missing or unreadable batch
    /// file is reported and the program still exits normally. Failing to
    /// talk to the terminal is fatal.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Usage(_) => 1,
            Self::NotFound { .. } | Self::Io { path: Some(_), .. } => 0,
            Self::Io { path: None, .. } => 1,
        }
    }
}

impl From<std::io::Error> for GreeterError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}
