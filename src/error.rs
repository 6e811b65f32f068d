use std::fmt;
use std::io;

use quill_rope::RopeError;

/// Errors surfaced at the command-line and REPL boundary.
#[derive(Debug)]
pub enum CliError {
    /// A command-line argument could not be parsed. Carries the offending token.
    ArgParse(String),
    /// Propagated from the buffer layer.
    Rope(RopeError),
    /// Propagated from the REPL's own stdin/stdout handling.
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ArgParse(token) => write!(f, "could not parse argument: {}", token),
            CliError::Rope(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ArgParse(_) => None,
            CliError::Rope(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<RopeError> for CliError {
    fn from(e: RopeError) -> Self {
        CliError::Rope(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

pub type CliResult<T> = Result<T, CliError>;
