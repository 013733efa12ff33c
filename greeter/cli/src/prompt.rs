//! Terminal prompts backed by `inquire`.

use std::io;

use greeter_lib::{InputEvent, LineSource};
use inquire::{InquireError, Text};

/// Asks each question with an `inquire` text prompt.
///
/// Ctrl-C interrupts the session. Esc ends it the way end of input does on
/// a piped stream.
#[derive(Debug, Default)]
pub struct InquireSource;

impl LineSource for InquireSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        event_from(Text::new(prompt.trim_end()).prompt())
    }
}

fn event_from(answer: Result<String, InquireError>) -> io::Result<InputEvent> {
    match answer {
        Ok(line) => Ok(InputEvent::Line(line)),
        Err(InquireError::OperationInterrupted) => Ok(InputEvent::Interrupted),
        Err(InquireError::OperationCanceled) => Ok(InputEvent::EndOfInput),
        Err(InquireError::IO(err)) => Err(err),
        Err(other) => Err(io::Error::other(other.to_string())),
    }
}
