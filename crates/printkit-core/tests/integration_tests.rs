//! Integration tests for printkit-core.
//!
//! Drives the public macro surface against recording sinks. The flush
//! marker `#` makes flush calls visible in the captured output. That the
//! `nothing` sentinel never reaches a write is a type-level guarantee
//! (`Nothing` has no `Display` impl); these tests cover its observable
//! effect on separators instead.

use std::fmt;

use printkit_core::prelude::*;
use printkit_core::print;

/// Records everything written; appends `#` on every flush.
#[derive(Default)]
struct Recorder {
    out: String,
    writes: usize,
    flushes: usize,
}

impl Recorder {
    fn take(&mut self) -> String {
        std::mem::take(&mut self.out)
    }
}

impl Sink for Recorder {
    fn write_value(&mut self, value: &dyn fmt::Display) -> PrintResult<()> {
        use fmt::Write;
        self.writes += 1;
        write!(self.out, "{value}")?;
        Ok(())
    }

    fn flush(&mut self) -> PrintResult<()> {
        self.flushes += 1;
        self.out.push('#');
        Ok(())
    }
}

/// Flushes the sink twice per request.
struct FlushTwice;

impl FlushStrategy for FlushTwice {
    fn flush(&self, sink: &mut dyn Sink) -> PrintResult<()> {
        sink.flush()?;
        sink.flush()
    }
}

// ── defaults ─────────────────────────────────────────────────────────────────

#[test]
fn empty_print_emits_only_the_terminator() {
    let mut sink = Recorder::default();
    print!(file = sink).unwrap();
    assert_eq!(sink.out, "\n");
}

#[test]
fn values_joined_with_space_and_newline() {
    let mut sink = Recorder::default();
    let a = 1;
    let b = 4;
    print!(a, '+', b, "==", a + b, file = sink).unwrap();
    assert_eq!(sink.out, "1 + 4 == 5\n");
}

#[test]
fn single_value_hello_world() {
    let mut sink = Recorder::default();
    print!("Hello, world!", file = sink).unwrap();
    assert_eq!(sink.out, "Hello, world!\n");
}

#[test]
fn two_values_share_the_default_separator() {
    let mut sink = Recorder::default();
    print!("Hello,", "world!", file = sink).unwrap();
    assert_eq!(sink.out, "Hello, world!\n");
}

// ── sep and end slots ────────────────────────────────────────────────────────

#[test]
fn custom_separator() {
    let mut sink = Recorder::default();
    print!(1, 4, sep = "; ", file = sink).unwrap();
    assert_eq!(sink.out, "1; 4\n");
}

#[test]
fn end_carries_a_value_even_with_no_arguments() {
    let mut sink = Recorder::default();
    print!(end = "Hello, world!\n", file = sink).unwrap();
    assert_eq!(sink.out, "Hello, world!\n");
}

#[test]
fn end_nothing_emits_nothing_at_all() {
    let mut sink = Recorder::default();
    print!(end = nothing, file = sink).unwrap();
    assert_eq!(sink.out, "");
    assert_eq!(sink.writes, 0);
}

#[test]
fn sep_nothing_and_bare_sep_are_equivalent() {
    let mut sink = Recorder::default();
    print!("Hello, ", "world!", sep = nothing, file = sink).unwrap();
    assert_eq!(sink.take(), "Hello, world!\n");

    print!("Hello, ", "world!", sep, file = sink).unwrap();
    assert_eq!(sink.take(), "Hello, world!\n");
}

#[test]
fn empty_separator_still_writes_per_gap() {
    let mut sink = Recorder::default();
    print!("a", "b", "c", sep = "", end = nothing, file = sink).unwrap();
    assert_eq!(sink.out, "abc");
    // a, "", b, "", c — the empty separator is written, unlike `nothing`.
    assert_eq!(sink.writes, 5);
}

#[test]
fn nothing_separator_never_writes() {
    let mut sink = Recorder::default();
    print!("a", "b", "c", sep = nothing, end = nothing, file = sink).unwrap();
    assert_eq!(sink.out, "abc");
    assert_eq!(sink.writes, 3);
}

#[test]
fn options_accepted_in_any_position() {
    let mut sink = Recorder::default();
    print!(end = "world!\n", "Hello, ", sep = "unused between one value", file = sink).unwrap();
    assert_eq!(sink.out, "Hello, world!\n");
}

// ── the nothing sentinel as a value ──────────────────────────────────────────

#[test]
fn sentinel_suppresses_adjacent_separators() {
    let mut sink = Recorder::default();
    print!(
        "Hello,",
        nothing,
        " ",
        nothing,
        "world!",
        sep = "sentinel did not work",
        file = sink
    )
    .unwrap();
    assert_eq!(sink.out, "Hello, world!\n");
}

#[test]
fn sentinel_between_values_drops_one_separator() {
    let mut sink = Recorder::default();
    print!("a", nothing, "b", end = "", sep = "+", file = sink).unwrap();
    assert_eq!(sink.out, "ab");
}

#[test]
fn sentinel_removal_only_restores_the_separator() {
    let mut sink = Recorder::default();
    print!("a", "b", end = nothing, sep = "+", file = sink).unwrap();
    assert_eq!(sink.take(), "a+b");
    print!("a", nothing, "b", end = nothing, sep = "+", file = sink).unwrap();
    assert_eq!(sink.take(), "ab");
}

// ── flush ────────────────────────────────────────────────────────────────────

#[test]
fn flush_true_flushes_once_after_the_terminator() {
    let mut sink = Recorder::default();
    print!(flush = true, file = sink).unwrap();
    assert_eq!(sink.out, "\n#");
    assert_eq!(sink.flushes, 1);
}

#[test]
fn bare_flush_is_flush_true() {
    let mut sink = Recorder::default();
    print!(flush, file = sink).unwrap();
    assert_eq!(sink.out, "\n#");
}

#[test]
fn flush_false_and_omitted_flush_never_flush() {
    let mut sink = Recorder::default();
    print!(flush = false, file = sink).unwrap();
    print!(file = sink).unwrap();
    assert_eq!(sink.flushes, 0);
}

#[test]
fn flush_with_strategy_replaces_the_default() {
    let mut sink = Recorder::default();
    print!(flush = true, flush_with = FlushTwice, file = sink).unwrap();
    assert_eq!(sink.out, "\n##");
    assert_eq!(sink.flushes, 2);
}

#[test]
fn flush_with_without_request_is_inert() {
    let mut sink = Recorder::default();
    print!(flush_with = FlushTwice, file = sink).unwrap();
    assert_eq!(sink.flushes, 0);
}

// ── entry points ─────────────────────────────────────────────────────────────

#[test]
fn raw_print_concatenates() {
    let mut sink = Recorder::default();
    raw_print!("Hello,", ' ', "world!", '\n', file = sink).unwrap();
    assert_eq!(sink.out, "Hello, world!\n");
}

#[test]
fn raw_print_accepts_explicit_slots() {
    let mut sink = Recorder::default();
    raw_print!("Hello,", "world!", sep = ' ', end = '\n', file = sink).unwrap();
    assert_eq!(sink.out, "Hello, world!\n");
}

#[test]
fn print_no_end_drops_only_the_terminator() {
    let mut sink = Recorder::default();
    print_no_end!("Hello,", "world!\n", file = sink).unwrap();
    assert_eq!(sink.out, "Hello, world!\n");
}

#[test]
fn print_with_bare_markers_equals_raw_print() {
    let mut left = Recorder::default();
    let mut right = Recorder::default();
    print!("x", "y", "z", sep, end, file = left).unwrap();
    raw_print!("x", "y", "z", file = right).unwrap();
    assert_eq!(left.out, right.out);
}

#[test]
fn file_may_come_first() {
    let mut sink = Recorder::default();
    raw_print!(file = sink, 'H', 'e', 'l', 'l', 'o', '!').unwrap();
    assert_eq!(sink.out, "Hello!");
}

#[test]
fn consecutive_calls_share_a_sink() {
    let mut sink = Recorder::default();
    print!(end = "Hello,", file = sink).unwrap();
    print!("", "world!", file = sink).unwrap();
    assert_eq!(sink.out, "Hello, world!\n");
}

// ── errors ───────────────────────────────────────────────────────────────────

#[test]
fn sink_error_is_returned_and_latched() {
    struct Closed {
        attempts: usize,
    }
    impl Sink for Closed {
        fn write_value(&mut self, _: &dyn fmt::Display) -> PrintResult<()> {
            self.attempts += 1;
            Err(PrintError::from(std::io::Error::other("closed")))
        }
    }

    let mut sink = Closed { attempts: 0 };
    let result = print!("a", "b", file = sink);
    assert!(result.is_err());
    assert_eq!(sink.attempts, 1);
}

#[test]
fn successful_call_returns_ok() {
    let mut sink = Recorder::default();
    assert!(print!("fine", file = sink).is_ok());
}
