mod prompt;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use greeter_lib::{
    GreeterError,
    InteractiveSession,
    LogConfig,
    LogLevel,
    Mode,
    ReaderSource,
    SessionEnd,
    build_subscriber,
    greet_direct,
    process_file,
};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::prompt::InquireSource;

/// Greet people interactively, from flags, or from a file of names.
///
/// With no arguments the greeter prompts for names until you type `quit`.
#[derive(Debug, Parser)]
#[command(name = "greeter")]
#[command(version)]
#[command(about = "Greet people interactively, from flags, or from a file of names")]
#[command(after_help = "\
Examples:
  # Interactive mode
  greeter

  # Direct greeting
  greeter --first-name John --last-name Doe

  # With title
  greeter --first-name Jane --last-name Smith --title Dr.

  # From file (one per line: 'FirstName LastName [Title]')
  greeter --file names.txt

  # With debug logging
  greeter --log-level DEBUG")]
struct Cli {
    /// First name for direct greeting mode.
    #[arg(short = 'f', long, value_name = "NAME")]
    first_name: Option<String>,

    /// Last name for direct greeting mode.
    #[arg(short = 'l', long, value_name = "NAME")]
    last_name: Option<String>,

    /// Optional title (Mr., Ms., Dr., etc.).
    #[arg(short = 't', long, value_name = "TITLE")]
    title: Option<String>,

    /// Process names from a file (one per line: 'FirstName LastName [Title]').
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Diagnostic verbosity: DEBUG, INFO, WARNING, ERROR or CRITICAL.
    ///
    /// RUST_LOG, when set, takes precedence.
    #[arg(
        long,
        value_name = "LEVEL",
        default_value_t = LogLevel::default(),
        value_parser = parse_log_level
    )]
    log_level: LogLevel,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] TryInitError),

    #[error(transparent)]
    Greeter(#[from] GreeterError),
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    value.parse()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Greeter(err)) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.log_level)?;

    let mode = Mode::select(cli.first_name, cli.last_name, cli.title, cli.file)?;
    debug!(?mode, "Selected mode");

    let mut out = io::stdout().lock();
    match mode {
        Mode::File(path) => {
            let summary = process_file(&path, &mut out)?;
            info!(
                greeted = summary.greeted,
                malformed = summary.malformed,
                rejected = summary.rejected,
                "Finished file"
            );
        }
        Mode::Direct { first, last, title } => {
            greet_direct(&first, &last, title.as_deref(), &mut out)?;
        }
        Mode::Interactive => {
            let end = run_interactive(&mut out)?;
            debug!(?end, "Interactive mode ended");
        }
    }

    Ok(())
}

/// Installs the diagnostics subscriber on stderr, keeping stdout for
/// greetings.
fn init_logging(level: LogLevel) -> Result<(), TryInitError> {
    let config = LogConfig::new(level).with_env();
    build_subscriber(&config, io::stderr).try_init()
}

/// Prompts with `inquire` on a terminal and reads plain lines otherwise.
fn run_interactive<W: Write>(out: &mut W) -> Result<SessionEnd, GreeterError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        InteractiveSession::new(InquireSource).run(out)
    } else {
        InteractiveSession::new(ReaderSource::new(stdin.lock(), io::stdout())).run(out)
    }
}

/// Prints the user-facing message for a failed run.
///
/// Validation failures print nothing here; the validator has already logged
/// which field was rejected.
fn report(err: &GreeterError) {
    match err {
        GreeterError::Validation(_) => {}
        GreeterError::Usage(_) | GreeterError::NotFound { .. } => println!("Error: {err}"),
        GreeterError::Io { path: Some(_), source } => {
            println!("Error processing file: {source}");
        }
        GreeterError::Io { path: None, source } => eprintln!("Error: {source}"),
    }
}
