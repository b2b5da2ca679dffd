//! The `print!`, `raw_print!`, and `print_no_end!` macros.
//!
//! # Argument grammar
//!
//! ```text
//! print!(value, ..., [sep = V] [end = V] [file = S] [flush = B] [flush_with = F])
//! ```
//!
//! | argument          | effect                                              |
//! |-------------------|-----------------------------------------------------|
//! | any expression    | emitted in order, joined by the separator           |
//! | `nothing`         | emits nothing, swallows the adjacent separator      |
//! | `sep = V`         | separator (`V` displayable, or `nothing`)           |
//! | `sep`             | shorthand for `sep = nothing`                       |
//! | `end = V`         | terminator (`V` displayable, or `nothing`)          |
//! | `end`             | shorthand for `end = nothing`                       |
//! | `file = S`        | output sink (`S: Sink`, borrowed for the call)      |
//! | `flush = B`       | request (`true`) or decline (`false`) a flush       |
//! | `flush`           | shorthand for `flush = true`                        |
//! | `flush_with = F`  | custom [`crate::FlushStrategy`]                     |
//!
//! Keyword arguments may appear in any position, each slot at most once —
//! a duplicate fails to compile (see [`crate::PrintOptions`]). The whole
//! invocation evaluates to [`crate::PrintResult`]`<()>`.
//!
//! `sep`, `end`, `file`, `flush`, `flush_with`, and `nothing` are keywords of
//! this grammar. To print a variable that happens to carry one of those
//! names, parenthesize it: `print!((sep))`.
//!
//! Expansion builds one expression: the options-record setter chain, then
//! `into_emitter()`, then one `value`/`skip` call per argument in source
//! order, then `finish()`. Keyword value expressions are therefore evaluated
//! before value expressions regardless of textual position.
//!
//! Importing any of these macros shadows the std prelude macro of the same
//! name at the use site.

/// Print values joined by a separator (default `' '`), followed by a
/// terminator (default `'\n'`), to a sink (default stdout).
///
/// ```
/// use std::fmt;
/// use printkit_core::prelude::*;
/// use printkit_core::print;
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
/// let mut out = Buffer(String::new());
/// let a = 1;
/// let b = 4;
/// print!(a, '+', b, "==", a + b, file = out).unwrap();
/// assert_eq!(out.0, "1 + 4 == 5\n");
///
/// out.0.clear();
/// print!(a, b, sep = "; ", file = out).unwrap();
/// assert_eq!(out.0, "1; 4\n");
/// ```
#[macro_export]
macro_rules! print {
    ($($args:tt)*) => {
        $crate::__printkit!(@opts ($crate::PrintOptions::print()) @emit () $($args)*)
    };
}

/// Like [`print!`] with no separator and no terminator: pure concatenation.
///
/// `raw_print!(x, y, z)` is equivalent to `print!(x, y, z, sep, end)`.
#[macro_export]
macro_rules! raw_print {
    ($($args:tt)*) => {
        $crate::__printkit!(@opts ($crate::PrintOptions::raw()) @emit () $($args)*)
    };
}

/// Like [`print!`] but with no terminator.
///
/// `print_no_end!(x, y)` is equivalent to `print!(x, y, end)`.
#[macro_export]
macro_rules! print_no_end {
    ($($args:tt)*) => {
        $crate::__printkit!(@opts ($crate::PrintOptions::no_end()) @emit () $($args)*)
    };
}

/// Argument classifier shared by the three entry macros. Not public API.
///
/// Munches one argument per step, routing keyword arguments into the
/// options-record chain (`@opts`) and values into the emitter chain
/// (`@emit`). Keyword rules come first so they win over the trailing
/// `$value:expr` rule; within a keyword, the `= nothing` form is matched
/// before the general `= expr` form.
#[doc(hidden)]
#[macro_export]
macro_rules! __printkit {
    // All arguments consumed: splice one expression so every borrowed
    // temporary lives until the end of the enclosing statement.
    (@opts ($($opts:tt)*) @emit ($($emit:tt)*)) => {
        $($opts)*.into_emitter()$($emit)*.finish()
    };

    // ── sep ──────────────────────────────────────────────────────────────
    (@opts ($($opts:tt)*) @emit ($($emit:tt)*) sep = nothing $(, $($rest:tt)*)?) => {
        $crate::__printkit!(@opts ($($opts)*.sep($crate::Nothing)) @emit ($($emit)*) $($($rest)*)?)
    };
    (@opts ($($opts:tt)*) @emit ($($emit:tt)*) sep = $value:expr $(, $($rest:tt)*)?) => {
        $crate::__printkit!(@opts ($($opts)*.sep(&$value)) @emit ($($emit)*) $($($rest)*)?)
    };
    (@opts ($($opts:tt)*) @emit ($($emit:tt)*) sep $(, $($rest:tt)*)?) => {
        $crate::__printkit!(@opts ($($opts)*.sep($crate::Nothing)) @emit ($($emit)*) $($($rest)*)?)
    };

    // ── end ──────────────────────────────────────────────────────────────
    (@opts ($($opts:tt)*) @emit ($($emit:tt)*) end = nothing $(, $($rest:tt)*)?) => {
        $crate::__printkit!(@opts ($($opts)*.end($crate::Nothing)) @emit ($($emit)*) $($($rest)*)?)
    };
    (@opts ($($opts:tt)*) @emit ($($emit:tt)*) end = $value:expr $(, $($rest:tt)*)?) => {
        $crate::__printkit!(@opts ($($opts)*.end(&$value)) @emit ($($emit)*) $($($rest)*)?)
    };
    (@opts ($($opts:tt)*) @emit ($($emit:tt)*) end $(, $($rest:tt)*)?) => {
        $crate::__printkit!(@opts ($($opts)*.end($crate::Nothing)) @emit ($($emit)*) $($($rest)*)?)
    };

    // ── file ─────────────────────────────────────────────────────────────
    // No bare shorthand: a sink has no sensible default other than stdout,
    // which is already the unset behavior.
    (@opts ($($opts:tt)*) @emit ($($emit:tt)*) file = $value:expr $(, $($rest:tt)*)?) => {
        $crate::__printkit!(@opts ($($opts)*.file(&mut $value)) @emit ($($emit)*) $($($rest)*)?)
    };

    // ── flush ────────────────────────────────────────────────────────────
    (@opts ($($opts:tt)*) @emit ($($emit:tt)*) flush = $value:expr $(, $($rest:tt)*)?) => {
        $crate::__printkit!(@opts ($($opts)*.flush($value)) @emit ($($emit)*) $($($rest)*)?)
    };
    (@opts ($($opts:tt)*) @emit ($($emit:tt)*) flush $(, $($rest:tt)*)?) => {
        $crate::__printkit!(@opts ($($opts)*.flush(true)) @emit ($($emit)*) $($($rest)*)?)
    };
    (@opts ($($opts:tt)*) @emit ($($emit:tt)*) flush_with = $value:expr $(, $($rest:tt)*)?) => {
        $crate::__printkit!(@opts ($($opts)*.flush_with($value)) @emit ($($emit)*) $($($rest)*)?)
    };

    // ── values ───────────────────────────────────────────────────────────
    (@opts ($($opts:tt)*) @emit ($($emit:tt)*) nothing $(, $($rest:tt)*)?) => {
        $crate::__printkit!(@opts ($($opts)*) @emit ($($emit)*.skip()) $($($rest)*)?)
    };
    (@opts ($($opts:tt)*) @emit ($($emit:tt)*) $value:expr $(, $($rest:tt)*)?) => {
        $crate::__printkit!(@opts ($($opts)*) @emit ($($emit)*.value(&$value)) $($($rest)*)?)
    };
}
