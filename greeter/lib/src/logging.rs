//! Diagnostics configuration.
//!
//! The subscriber is built explicitly and handed back to the caller. The
//! binary installs it once as the global default; tests scope it to a
//! closure with [`tracing::subscriber::with_default`] and an in-memory
//! writer.

use std::fmt;
use std::str::FromStr;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::ChronoLocal;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Diagnostic verbosity accepted by `--log-level`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    /// Same threshold as [`LogLevel::Error`]; tracing has no level above it.
    Critical,
}

impl LogLevel {
    pub const NAMES: [&'static str; 5] = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

    /// The `EnvFilter` directive for this level.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Parses a level name case-insensitively.
    ///
    /// ## Examples
    ///
    /// ```
    /// use greeter_lib::LogLevel;
    ///
    /// assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warning));
    /// assert_eq!("CRITICAL".parse::<LogLevel>(), Ok(LogLevel::Critical));
    /// assert!("loud".parse::<LogLevel>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(format!("expected one of {}", Self::NAMES.join(", "))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        };
        f.write_str(name)
    }
}

/// Settings for the diagnostics subscriber.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Level requested on the command line.
    pub level: LogLevel,
    /// Filter directives from `RUST_LOG`, which take precedence when valid.
    pub env_override: Option<String>,
}

impl LogConfig {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            env_override: None,
        }
    }

    /// Reads `RUST_LOG` into [`LogConfig::env_override`].
    pub fn with_env(mut self) -> Self {
        self.env_override = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        self
    }

    /// Builds the event filter, falling back to `level` when the override is
    /// absent, blank or unparseable.
    pub fn env_filter(&self) -> EnvFilter {
        self.env_override
            .as_deref()
            .filter(|directives| !directives.trim().is_empty())
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(self.level.directive()))
    }
}

/// Builds a timestamped, leveled, plain-text subscriber writing to
/// `make_writer`.
pub fn build_subscriber<W>(
    config: &LogConfig,
    make_writer: W,
) -> impl Subscriber + Send + Sync + use<W>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(make_writer)
        .finish()
}
