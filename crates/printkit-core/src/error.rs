//! Unified error handling for printkit-core.
//!
//! Argument *misuse* (duplicate slots, non-displayable values, non-sink
//! `file` arguments) never reaches this module — it is rejected at compile
//! time by the typestate record and the trait bounds. The only runtime
//! failures are sink write failures, surfaced here.

use thiserror::Error;

/// Root error type for print operations.
///
/// The emitter latches the first error it sees and suppresses every
/// subsequent write; `finish()` returns the latched value.
#[derive(Debug, Error)]
pub enum PrintError {
    /// An I/O-backed sink failed to write or flush.
    #[error("sink write failed: {0}")]
    Write(#[from] std::io::Error),

    /// A formatter-backed sink failed to write.
    #[error("sink formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

impl PrintError {
    /// Whether this error is a broken pipe.
    ///
    /// Callers printing to stdout conventionally treat EPIPE as a normal
    /// end of output (`printkit a b | head -0`) rather than a failure.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Write(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

/// Convenient result type alias.
pub type PrintResult<T> = Result<T, PrintError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn broken_pipe_is_classified() {
        let err = PrintError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        assert!(err.is_broken_pipe());
    }

    #[test]
    fn other_io_errors_are_not_broken_pipe() {
        let err = PrintError::from(io::Error::new(io::ErrorKind::PermissionDenied, "no"));
        assert!(!err.is_broken_pipe());
    }

    #[test]
    fn fmt_errors_are_not_broken_pipe() {
        assert!(!PrintError::from(std::fmt::Error).is_broken_pipe());
    }

    #[test]
    fn display_names_the_sink() {
        let err = PrintError::from(io::Error::other("boom"));
        assert!(err.to_string().contains("sink write failed"));
    }
}
