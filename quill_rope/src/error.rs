use std::fmt;
use std::io;

/// Errors surfaced by the file backing store and the rope built on top of it.
#[derive(Debug)]
pub enum RopeError {
    /// The backing file could not be opened or created.
    IoOpen(io::Error),
    /// A read failed for a reason other than reaching end of file.
    IoRead(io::Error),
    /// A write returned short or failed outright.
    IoWrite(io::Error),
}

impl fmt::Display for RopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RopeError::IoOpen(e) => write!(f, "could not open file: {}", e),
            RopeError::IoRead(e) => write!(f, "read error: {}", e),
            RopeError::IoWrite(e) => write!(f, "write error: {}", e),
        }
    }
}

impl std::error::Error for RopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RopeError::IoOpen(e) | RopeError::IoRead(e) | RopeError::IoWrite(e) => Some(e),
        }
    }
}

pub type RopeResult<T> = Result<T, RopeError>;
