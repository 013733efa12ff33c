//! Batch greetings from a line-oriented text file.
//!
//! Each record is `FirstName LastName [Title]`, whitespace-delimited. Blank
//! lines and lines starting with `#` are ignored, and tokens after the
//! title are dropped.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::error::GreeterError;
use crate::greeting::GreetingRequest;

/// How a single input line is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record<'a> {
    /// Blank line or `#` comment.
    Skip,
    /// Fewer than two tokens.
    Malformed,
    /// A first and last name with an optional title.
    Entry {
        first: &'a str,
        last: &'a str,
        title: Option<&'a str>,
    },
}

/// Classifies one line of batch input.
///
/// ## Examples
///
/// ```
/// use greeter_lib::{Record, parse_record};
///
/// assert_eq!(parse_record("  # note"), Record::Skip);
/// assert_eq!(parse_record("Cher"), Record::Malformed);
/// assert_eq!(
///     parse_record("Jane Smith Dr. extra"),
///     Record::Entry { first: "Jane", last: "Smith", title: Some("Dr.") }
/// );
/// ```
pub fn parse_record(line: &str) -> Record<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Record::Skip;
    }

    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(first), Some(last)) => Record::Entry {
            first,
            last,
            title: tokens.next(),
        },
        _ => Record::Malformed,
    }
}

/// Counts of what happened to each line of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Lines that produced a greeting.
    pub greeted: usize,
    /// Blank and comment lines.
    pub skipped: usize,
    /// Lines with fewer than two tokens.
    pub malformed: usize,
    /// Lines whose first or last name failed validation.
    pub rejected: usize,
}

/// Greets every valid record read from `reader`, writing to `out`.
///
/// Titles are passed through without validation. Malformed and rejected
/// lines are logged and skipped; they never stop the batch.
///
/// ## Errors
///
/// Returns [`GreeterError::Io`] when reading or writing fails. Greetings
/// written before the failure are kept.
pub fn process_lines<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
) -> Result<BatchSummary, GreeterError> {
    let mut summary = BatchSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_num = index + 1;
        let line = line?;

        match parse_record(&line) {
            Record::Skip => summary.skipped += 1,
            Record::Malformed => {
                warn!(line = line_num, "Line {line_num}: Invalid format - {}", line.trim());
                summary.malformed += 1;
            }
            Record::Entry { first, last, title } => {
                match GreetingRequest::parse(first, last, title) {
                    Ok(request) => {
                        writeln!(out, "{}", request.greeting())?;
                        summary.greeted += 1;
                    }
                    Err(_) => {
                        debug!(line = line_num, "Skipping line with invalid name");
                        summary.rejected += 1;
                    }
                }
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

/// Greets every valid record in the file at `path`.
///
/// ## Errors
///
/// - [`GreeterError::NotFound`] if `path` does not exist; nothing is read.
/// - [`GreeterError::Io`] if existence cannot be determined (e.g. a parent
///   component is not a searchable directory).
/// - [`GreeterError::Io`] if the file cannot be opened or decoded as UTF-8
///   part way through.
pub fn process_file<W: Write>(path: &Path, out: &mut W) -> Result<BatchSummary, GreeterError> {
    info!(path = %path.display(), "Processing file");

    match path.try_exists() {
        Ok(true) => {}
        Ok(false) => {
            error!("File not found: {}", path.display());
            return Err(GreeterError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            error!("Error processing file: {source}");
            return Err(GreeterError::Io {
                path: Some(path.to_path_buf()),
                source,
            });
        }
    }

    let result = File::open(path)
        .map_err(GreeterError::from)
        .and_then(|file| process_lines(BufReader::new(file), out));

    match result {
        Ok(summary) => {
            debug!(?summary, "Finished processing file");
            Ok(summary)
        }
        Err(GreeterError::Io { source, .. }) => {
            error!("Error processing file: {source}");
            Err(GreeterError::Io {
                path: Some(path.to_path_buf()),
                source,
            })
        }
        Err(other) => Err(other),
    }
}
