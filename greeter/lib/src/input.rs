//! Line-oriented input sources for the interactive driver.
//!
//! End of input and user interrupts are reported as [`InputEvent`] variants
//! rather than errors or signals, so a scripted source can reproduce both.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// The outcome of asking for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line of text, without its trailing newline.
    Line(String),
    /// The input stream is exhausted.
    EndOfInput,
    /// The user asked to stop (e.g. Ctrl-C at a prompt).
    Interrupted,
}

/// Something that can answer a prompt with a line of text.
pub trait LineSource {
    /// Shows `prompt` and waits for one line.
    ///
    /// ## Errors
    ///
    /// Returns an I/O error when the underlying stream fails for a reason
    /// other than reaching its end.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        (**self).read_line(prompt)
    }
}

/// Reads lines from a buffered reader, echoing prompts to a writer.
///
/// This is the source used when stdin is piped rather than a terminal.
#[derive(Debug)]
pub struct ReaderSource<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> ReaderSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        write!(self.prompt_out, "{prompt}")?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(InputEvent::EndOfInput);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(InputEvent::Line(line))
    }
}

/// A pre-recorded sequence of input events.
///
/// Once the script runs out every further read yields
/// [`InputEvent::EndOfInput`]. Prompts are recorded so callers can check
/// which questions were asked.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    events: VecDeque<InputEvent>,
    prompts: Vec<String>,
}

impl ScriptedSource {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Builds a script where every entry is a typed line.
    ///
    /// ## Examples
    ///
    /// ```
    /// use greeter_lib::{InputEvent, LineSource, ScriptedSource};
    ///
    /// let mut source = ScriptedSource::from_lines(["quit"]);
    /// assert_eq!(source.read_line("> ").unwrap(), InputEvent::Line("quit".into()));
    /// assert_eq!(source.read_line("> ").unwrap(), InputEvent::EndOfInput);
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(lines.into_iter().map(|l| InputEvent::Line(l.into())))
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        self.prompts.push(prompt.to_string());
        Ok(self.events.pop_front().unwrap_or(InputEvent::EndOfInput))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_source_strips_newlines_only() {
        let mut out = Vec::new();
        let mut source = ReaderSource::new(Cursor::new("  Jane \r\nDoe\n"), &mut out);

        assert_eq!(
            source.read_line("first: ").unwrap(),
            InputEvent::Line("  Jane ".to_string())
        );
        assert_eq!(
            source.read_line("last: ").unwrap(),
            InputEvent::Line("Doe".to_string())
        );
        assert_eq!(source.read_line("again: ").unwrap(), InputEvent::EndOfInput);
        drop(source);

        assert_eq!(String::from_utf8(out).unwrap(), "first: last: again: ");
    }

    #[test]
    fn reader_source_returns_last_line_without_newline() {
        let mut source = ReaderSource::new(Cursor::new("quit"), io::sink());
        assert_eq!(
            source.read_line("> ").unwrap(),
            InputEvent::Line("quit".to_string())
        );
        assert_eq!(source.read_line("> ").unwrap(), InputEvent::EndOfInput);
    }

    #[test]
    fn reader_source_reports_blank_line_as_empty_text() {
        let mut source = ReaderSource::new(Cursor::new("\n"), io::sink());
        assert_eq!(source.read_line("> ").unwrap(), InputEvent::Line(String::new()));
    }

    #[test]
    fn scripted_source_records_prompts_and_ends() {
        let mut source = ScriptedSource::new([
            InputEvent::Line("Jane".to_string()),
            InputEvent::Interrupted,
        ]);
        assert_eq!(source.read_line("a").unwrap(), InputEvent::Line("Jane".to_string()));
        assert_eq!(source.read_line("b").unwrap(), InputEvent::Interrupted);
        assert_eq!(source.read_line("c").unwrap(), InputEvent::EndOfInput);
        assert_eq!(source.prompts(), ["a", "b", "c"]);
    }
}
