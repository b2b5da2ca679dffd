//! The `Nothing` sentinel and the `Glue` slot value.
//!
//! # Design
//!
//! These are pure value types — `Copy`, no identity, no heap. `Nothing` is
//! the "print nothing" marker: passed as a plain argument it suppresses the
//! next separator; used as a separator or terminator it suppresses that sink
//! write entirely. This is different from an empty string, which still
//! performs a write.
//!
//! # Domain purity
//!
//! This module must not import `tracing` or touch I/O. Observability and
//! writing are the responsibility of the application layer.

use std::fmt;

// ── Nothing ──────────────────────────────────────────────────────────────────

/// The "print nothing" marker.
///
/// `Nothing` deliberately does **not** implement [`std::fmt::Display`]: it can
/// never reach a sink's write operation, only change what the emitter does
/// around it.
///
/// In macro invocations it is spelled as the bare keyword `nothing`:
///
/// ```
/// use printkit_core::{print, Nothing, PrintOptions};
///
/// # fn demo() -> printkit_core::PrintResult<()> {
/// // "ab" — the sentinel swallows the separator between a and b
/// print!("a", nothing, "b", sep = "+", end = nothing)?;
///
/// // Builder form, without macros:
/// let opts = PrintOptions::print().end(Nothing);
/// # let _ = opts;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nothing;

// ── Glue ─────────────────────────────────────────────────────────────────────

/// The value of a separator or terminator slot.
///
/// Either a borrowed displayable value or [`Glue::Nothing`]. The borrow is
/// held only for the duration of one print call; nothing is copied.
#[derive(Clone, Copy)]
pub enum Glue<'a> {
    /// Write this value to the sink.
    Text(&'a dyn fmt::Display),
    /// Perform no write at all for this slot.
    Nothing,
}

impl<'a> Glue<'a> {
    /// Whether this slot performs a write.
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The displayable value, if any.
    pub fn text(&self) -> Option<&'a dyn fmt::Display> {
        match self {
            Self::Text(t) => Some(*t),
            Self::Nothing => None,
        }
    }
}

impl fmt::Debug for Glue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(t) => write!(f, "Text({t})"),
            Self::Nothing => f.write_str("Nothing"),
        }
    }
}

impl<'a, T: fmt::Display> From<&'a T> for Glue<'a> {
    fn from(value: &'a T) -> Self {
        Self::Text(value)
    }
}

impl From<Nothing> for Glue<'_> {
    fn from(_: Nothing) -> Self {
        Self::Nothing
    }
}
