//! Interactive prompt loop.

use std::io::Write;

use tracing::{debug, info};

use crate::error::GreeterError;
use crate::greeting::GreetingRequest;
use crate::input::{InputEvent, LineSource};
use crate::name::validate_name;

pub(crate) const BANNER: &str = "=== Interactive Greeting Mode ===";
pub(crate) const FIRST_NAME_PROMPT: &str = "What is your first name (or 'quit' to exit): ";
pub(crate) const LAST_NAME_PROMPT: &str = "What is your last name: ";
pub(crate) const TITLE_PROMPT: &str = "Title (optional, press Enter to skip): ";

const QUIT_TOKEN: &str = "quit";

/// Why an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `quit` at the first-name prompt.
    Quit,
    /// The input stream ran out.
    EndOfInput,
    /// The user interrupted a prompt.
    Interrupted,
}

impl SessionEnd {
    /// The message printed when the session ends this way.
    pub fn farewell(self) -> &'static str {
        match self {
            Self::Quit => "Goodbye!",
            Self::EndOfInput => "\nEnd of input. Goodbye!",
            Self::Interrupted => "\n\nInterrupted by user. Goodbye!",
        }
    }
}

/// Outcome of one pass through the first/last/title prompts.
enum Attempt {
    Greeted(String),
    Retry,
    Finished(SessionEnd),
}

/// A prompt loop that greets users until they quit or input ends.
///
/// Any invalid answer restarts the sequence from the first-name prompt. A
/// rejected first name therefore never consumes a last-name prompt, and a
/// rejected last name or title means the first name is asked again.
pub struct InteractiveSession<S> {
    source: S,
    greeted: usize,
}

impl<S: LineSource> InteractiveSession<S> {
    pub fn new(source: S) -> Self {
        Self { source, greeted: 0 }
    }

    /// Number of greetings emitted so far.
    pub fn greeted(&self) -> usize {
        self.greeted
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Runs the loop until it terminates, writing greetings to `out`.
    ///
    /// ## Errors
    ///
    /// Returns [`GreeterError::Io`] if the input source or `out` fails.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<SessionEnd, GreeterError> {
        info!("Starting interactive mode");
        writeln!(out, "{BANNER}")?;

        loop {
            match self.attempt()? {
                Attempt::Greeted(greeting) => {
                    writeln!(out, "{greeting}")?;
                    writeln!(out)?;
                    out.flush()?;
                    self.greeted += 1;
                }
                Attempt::Retry => continue,
                Attempt::Finished(end) => {
                    debug!(?end, greeted = self.greeted, "Interactive session finished");
                    writeln!(out, "{}", end.farewell())?;
                    out.flush()?;
                    return Ok(end);
                }
            }
        }
    }

    fn attempt(&mut self) -> Result<Attempt, GreeterError> {
        let first = match self.ask(FIRST_NAME_PROMPT)? {
            Ok(line) => line,
            Err(end) => return Ok(Attempt::Finished(end)),
        };
        if first.eq_ignore_ascii_case(QUIT_TOKEN) {
            return Ok(Attempt::Finished(SessionEnd::Quit));
        }
        if validate_name(&first, "First name").is_err() {
            return Ok(Attempt::Retry);
        }

        let last = match self.ask(LAST_NAME_PROMPT)? {
            Ok(line) => line,
            Err(end) => return Ok(Attempt::Finished(end)),
        };
        if validate_name(&last, "Last name").is_err() {
            return Ok(Attempt::Retry);
        }

        let title = match self.ask(TITLE_PROMPT)? {
            Ok(line) => line,
            Err(end) => return Ok(Attempt::Finished(end)),
        };
        if !title.is_empty() && validate_name(&title, "Title").is_err() {
            return Ok(Attempt::Retry);
        }

        let title = (!title.is_empty()).then_some(title.as_str());
        let request = GreetingRequest::parse(&first, &last, title)?;
        Ok(Attempt::Greeted(request.greeting()))
    }

    /// Reads one trimmed answer, or the reason the session must end.
    fn ask(&mut self, prompt: &str) -> Result<Result<String, SessionEnd>, GreeterError> {
        Ok(match self.source.read_line(prompt)? {
            InputEvent::Line(line) => Ok(line.trim().to_string()),
            InputEvent::EndOfInput => Err(SessionEnd::EndOfInput),
            InputEvent::Interrupted => Err(SessionEnd::Interrupted),
        })
    }
}
