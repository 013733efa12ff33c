//! Greeter library.
//!
//! Validates name components, formats greetings and drives the three ways a
//! greeting request can arrive: an interactive prompt loop, parameters given
//! directly at startup, or a line-oriented batch file.
//!
//! ## Core Types
//!
//! - [`NameField`] - A validated first name, last name or title
//! - [`GreetingRequest`] - A validated first/last name pair with optional title
//! - [`Mode`] - Which driver handles an invocation
//!
//! ## Drivers
//!
//! - [`InteractiveSession`] - Prompt loop over any [`LineSource`]
//! - [`process_file`] / [`process_lines`] - Batch greetings from text
//! - [`greet_direct`] - A single greeting from startup parameters
//!
//! ## Logging
//!
//! - [`LogConfig`] / [`build_subscriber`] - Construct the diagnostics
//!   subscriber explicitly so callers decide where it is installed

mod batch;
mod direct;
mod error;
mod greeting;
pub mod input;
mod interactive;
pub mod logging;
mod mode;
mod name;

pub use batch::{BatchSummary, Record, parse_record, process_file, process_lines};
pub use direct::greet_direct;
pub use error::{GreeterError, NameError};
pub use greeting::{GreetingRequest, format_greeting};
pub use input::{InputEvent, LineSource, ReaderSource, ScriptedSource};
pub use interactive::{InteractiveSession, SessionEnd};
pub use logging::{LogConfig, LogLevel, build_subscriber};
pub use mode::Mode;
pub use name::{NameField, is_name_char, validate_name};
