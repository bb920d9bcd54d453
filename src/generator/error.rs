//! Error types for generation runs.

use std::fmt;

use crate::io::PackIoError;

/// Result type for generation runs.
pub type GenerateRunResult<T> = Result<T, GenerateError>;

/// Unrecoverable errors that fail a generation run.
///
/// Import-time read failures are *not* represented here: an unreadable
/// imported pack is skipped with a warning and the run continues.
#[derive(Debug)]
pub enum GenerateError {
    /// The base template could not be read.
    ReadBase(PackIoError),

    /// The final artifact could not be written.
    Write(PackIoError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadBase(e) => write!(f, "failed to read base pack: {}", e),
            Self::Write(e) => write!(f, "failed to write pack artifact: {}", e),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadBase(e) | Self::Write(e) => Some(e),
        }
    }
}
