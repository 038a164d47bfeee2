use std::fmt;
use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Whether a failed tape access was about to read or write the cell.
///
/// Only affects the diagnostic text; both halt execution the same way.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AccessKind {
    Read,
    Write,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Read => write!(f, "read from"),
            AccessKind::Write => write!(f, "write to"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// A `[` with no matching `]`.
    #[error("Syntax error: unenclosed loop detected. Missing ']'.")]
    MissingClose,

    /// A `]` with no matching `[`.
    #[error("Syntax error: unenclosed loop detected. Missing '['.")]
    MissingOpen,

    /// The cursor was outside the tape at a read or write instruction.
    #[error("Access violation: attempt to {0} an out-of-range address.")]
    AccessViolation(AccessKind),

    /// Environments require at least one cell.
    #[error("Tape capacity must be at least one cell.")]
    ZeroCapacity,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
