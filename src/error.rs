use rustyline::error::ReadlineError;
use thiserror::Error;

/// Failures that end a substitution session early.
///
/// Running out of input is not an error: it is reported as
/// [`Outcome::EndOfInput`](crate::Outcome::EndOfInput).
#[derive(Error, Debug)]
pub enum ReplaceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line editor failed: {0}")]
    Terminal(#[from] ReadlineError),
    #[error("stop word must not be empty")]
    EmptyStopWord,
}

pub type Result<T> = std::result::Result<T, ReplaceError>;
