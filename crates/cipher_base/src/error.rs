//! Error types for calendar-cipher calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar-cipher calculations.
///
/// The engine does no I/O, so the only failure is input it refuses to
/// interpret. It never falls back to a zero or placeholder value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CipherError {
    /// Malformed date string, out-of-range date component, or negative number.
    InvalidInput(String),
}

impl Display for CipherError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for CipherError {}
