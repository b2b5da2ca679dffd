//! The `PrintOptions` record and its typestate accumulator.
//!
//! `PrintOptions` plays the role of Python's keyword arguments to `print`:
//! separator, terminator, output sink, and flush flag. Four const-generic
//! booleans record which slots have been *explicitly* set, so setting the
//! same slot twice does not type-check — the duplicate is rejected before
//! the program can run, and the offending method name identifies the slot.
//!
//! The macros in [`crate::macros`] expand keyword arguments into these
//! setter calls; the record is equally usable without macros:
//!
//! ```
//! use printkit_core::{Nothing, PrintOptions};
//!
//! let opts = PrintOptions::print().sep(&"; ").end(Nothing);
//! # let _ = opts;
//! ```
//!
//! # Typestate
//!
//! Each setter consumes `self` and flips its boolean. Setters are only
//! implemented for the `false` state of their slot:
//!
//! ```compile_fail
//! use printkit_core::PrintOptions;
//!
//! // `sep` set twice: no method `sep` on the already-set record.
//! let _ = PrintOptions::print().sep(&", ").sep(&", ");
//! ```
//!
//! The same rejection reaches macro call-sites, since they expand to these
//! setters:
//!
//! ```compile_fail
//! use printkit_core::print;
//!
//! let _ = print!(1, 2, sep = ", ", sep = "; ");
//! ```

use crate::application::emitter::Emitter;
use crate::application::ports::{FlushSink, FlushStrategy, Sink};
use crate::domain::glue::Glue;

/// Accumulated print options with compile-time tracking of set slots.
///
/// Obtained from one of the three entry seeds ([`Self::print`],
/// [`Self::raw`], [`Self::no_end`]), refined by the setters, and consumed by
/// [`Self::into_emitter`]. All borrows live only for the duration of one
/// print call.
pub struct PrintOptions<
    'a,
    F = FlushSink,
    const SEP: bool = false,
    const END: bool = false,
    const FILE: bool = false,
    const FLUSH: bool = false,
> {
    pub(crate) sep: Glue<'a>,
    pub(crate) end: Glue<'a>,
    pub(crate) file: Option<&'a mut dyn Sink>,
    pub(crate) flush: Option<bool>,
    pub(crate) flusher: F,
}

// ── Entry seeds ──────────────────────────────────────────────────────────────

impl<'a> PrintOptions<'a> {
    /// Defaults for `print!`: separator `' '`, terminator `'\n'`.
    pub fn print() -> Self {
        Self {
            sep: Glue::Text(&' '),
            end: Glue::Text(&'\n'),
            file: None,
            flush: None,
            flusher: FlushSink,
        }
    }

    /// Defaults for `raw_print!`: no separator, no terminator.
    pub fn raw() -> Self {
        Self {
            sep: Glue::Nothing,
            end: Glue::Nothing,
            file: None,
            flush: None,
            flusher: FlushSink,
        }
    }

    /// Defaults for `print_no_end!`: separator `' '`, no terminator.
    pub fn no_end() -> Self {
        Self {
            sep: Glue::Text(&' '),
            end: Glue::Nothing,
            file: None,
            flush: None,
            flusher: FlushSink,
        }
    }
}

// ── Slot setters (one impl per unset slot) ───────────────────────────────────

impl<'a, F, const END: bool, const FILE: bool, const FLUSH: bool>
    PrintOptions<'a, F, false, END, FILE, FLUSH>
{
    /// Set the separator. Accepts any `&impl Display` or [`crate::Nothing`].
    pub fn sep(self, sep: impl Into<Glue<'a>>) -> PrintOptions<'a, F, true, END, FILE, FLUSH> {
        PrintOptions {
            sep: sep.into(),
            end: self.end,
            file: self.file,
            flush: self.flush,
            flusher: self.flusher,
        }
    }
}

impl<'a, F, const SEP: bool, const FILE: bool, const FLUSH: bool>
    PrintOptions<'a, F, SEP, false, FILE, FLUSH>
{
    /// Set the terminator. Accepts any `&impl Display` or [`crate::Nothing`].
    ///
    /// Once-only, like every slot:
    ///
    /// ```compile_fail
    /// use printkit_core::{Nothing, PrintOptions};
    ///
    /// let _ = PrintOptions::print().end(&"!").end(Nothing);
    /// ```
    ///
    /// ```compile_fail
    /// use printkit_core::print;
    ///
    /// let _ = print!(1, end = "!", end = nothing);
    /// ```
    pub fn end(self, end: impl Into<Glue<'a>>) -> PrintOptions<'a, F, SEP, true, FILE, FLUSH> {
        PrintOptions {
            sep: self.sep,
            end: end.into(),
            file: self.file,
            flush: self.flush,
            flusher: self.flusher,
        }
    }
}

impl<'a, F, const SEP: bool, const END: bool, const FLUSH: bool>
    PrintOptions<'a, F, SEP, END, false, FLUSH>
{
    /// Set the output sink. The sink is borrowed, never copied; without this
    /// call the emitter writes to locked standard output.
    ///
    /// A second sink does not type-check:
    ///
    /// ```compile_fail
    /// use std::fmt;
    /// use printkit_core::{PrintOptions, PrintResult, Sink};
    ///
    /// struct Buffer(String);
    /// impl Sink for Buffer {
    ///     fn write_value(&mut self, v: &dyn fmt::Display) -> PrintResult<()> {
    ///         use fmt::Write;
    ///         write!(self.0, "{v}")?;
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut a = Buffer(String::new());
    /// let mut b = Buffer(String::new());
    /// let _ = PrintOptions::print().file(&mut a).file(&mut b);
    /// ```
    ///
    /// ```compile_fail
    /// use std::fmt;
    /// use printkit_core::{print, PrintResult, Sink};
    ///
    /// struct Buffer(String);
    /// impl Sink for Buffer {
    ///     fn write_value(&mut self, v: &dyn fmt::Display) -> PrintResult<()> {
    ///         use fmt::Write;
    ///         write!(self.0, "{v}")?;
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut a = Buffer(String::new());
    /// let mut b = Buffer(String::new());
    /// let _ = print!(1, file = a, file = b);
    /// ```
    pub fn file(self, file: &'a mut dyn Sink) -> PrintOptions<'a, F, SEP, END, true, FLUSH> {
        PrintOptions {
            sep: self.sep,
            end: self.end,
            file: Some(file),
            flush: self.flush,
            flusher: self.flusher,
        }
    }
}

impl<'a, F, const SEP: bool, const END: bool, const FILE: bool>
    PrintOptions<'a, F, SEP, END, FILE, false>
{
    /// Request (or explicitly decline) a flush after the terminator.
    ///
    /// `flush(false)` and not calling `flush` at all both invoke the flush
    /// strategy zero times; the distinction only exists so that setting the
    /// slot twice can be rejected:
    ///
    /// ```compile_fail
    /// use printkit_core::PrintOptions;
    ///
    /// let _ = PrintOptions::print().flush(true).flush(false);
    /// ```
    ///
    /// ```compile_fail
    /// use printkit_core::print;
    ///
    /// let _ = print!(1, flush, flush = true);
    /// ```
    pub fn flush(self, flush: bool) -> PrintOptions<'a, F, SEP, END, FILE, true> {
        PrintOptions {
            sep: self.sep,
            end: self.end,
            file: self.file,
            flush: Some(flush),
            flusher: self.flusher,
        }
    }
}

// ── State-independent operations ─────────────────────────────────────────────

impl<'a, F: FlushStrategy, const SEP: bool, const END: bool, const FILE: bool, const FLUSH: bool>
    PrintOptions<'a, F, SEP, END, FILE, FLUSH>
{
    /// Replace the flush strategy (default: [`FlushSink`]).
    ///
    /// Unlike the four slots above this is not once-only; a later call
    /// replaces an earlier one.
    pub fn flush_with<G: FlushStrategy>(
        self,
        flusher: G,
    ) -> PrintOptions<'a, G, SEP, END, FILE, FLUSH> {
        PrintOptions {
            sep: self.sep,
            end: self.end,
            file: self.file,
            flush: self.flush,
            flusher,
        }
    }

    /// Finalize the record into an [`Emitter`].
    pub fn into_emitter(self) -> Emitter<'a, F> {
        Emitter::new(self.sep, self.end, self.file, self.flush, self.flusher)
    }
}
