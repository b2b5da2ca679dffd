//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No printing logic lives here.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// There are no subcommands: the whole tool is one echo-like operation, so
/// the values and the printing flags sit directly on the top level.
#[derive(Debug, Parser)]
#[command(
    name    = "printkit",
    bin_name = "printkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Print values with configurable separator and terminator",
    long_about = "Printkit joins its arguments with a separator, appends a \
                  terminator, and writes the result to stdout or stderr. \
                  Separator and terminator accept backslash escapes \
                  (\\n, \\t, \\r, \\0, \\xHH).",
    after_help = "EXAMPLES:\n\
        \x20 printkit a b c                  # 'a b c' and a newline\n\
        \x20 printkit --sep ', ' a b c       # 'a, b, c'\n\
        \x20 printkit --no-end -- waiting    # no trailing newline\n\
        \x20 printkit --raw a b c            # 'abc', nothing between or after\n\
        \x20 printkit --sep '\\t' 1 2 3      # tab-separated\n\
        \x20 printkit --flush --output stderr oops",
)]
pub struct Cli {
    /// Flags that are not about the printed text itself.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Values to print, in order.  May be empty: then only the terminator
    /// is written.
    #[arg(value_name = "VALUE", help = "Values to print")]
    pub values: Vec<String>,

    /// Separator between values.
    #[arg(
        short = 's',
        long = "sep",
        value_name = "STRING",
        conflicts_with = "no_sep",
        help = "Separator between values (default: one space)"
    )]
    pub sep: Option<String>,

    /// Print values back to back, with nothing between them.
    #[arg(long = "no-sep", help = "No separator between values")]
    pub no_sep: bool,

    /// Terminator after the last value.
    #[arg(
        short = 'e',
        long = "end",
        value_name = "STRING",
        conflicts_with = "no_end",
        help = "Terminator after the last value (default: newline)"
    )]
    pub end: Option<String>,

    /// Suppress the terminator.
    #[arg(long = "no-end", help = "No terminator after the last value")]
    pub no_end: bool,

    /// Raw mode: no separator and no terminator.
    #[arg(
        short = 'r',
        long = "raw",
        conflicts_with_all = ["sep", "no_sep", "end", "no_end"],
        help = "No separator and no terminator"
    )]
    pub raw: bool,

    /// Flush the stream after the terminator.
    #[arg(short = 'f', long = "flush", help = "Flush after printing")]
    pub flush: bool,

    /// Stream to write to.
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        help = "Stream to write to (default: stdout, or configured stream)"
    )]
    pub output: Option<Stream>,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Target output stream.
///
/// Shared with the config file, hence the serde derives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => write!(f, "stdout"),
            Self::Stderr => write!(f, "stderr"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn stream_display() {
        assert_eq!(Stream::Stdout.to_string(), "stdout");
        assert_eq!(Stream::Stderr.to_string(), "stderr");
    }

    #[test]
    fn parse_plain_values() {
        let cli = Cli::parse_from(["printkit", "a", "b", "c"]);
        assert_eq!(cli.values, ["a", "b", "c"]);
        assert!(cli.sep.is_none());
        assert!(!cli.raw);
    }

    #[test]
    fn parse_sep_and_end() {
        let cli = Cli::parse_from(["printkit", "--sep", ", ", "--end", "!", "x"]);
        assert_eq!(cli.sep.as_deref(), Some(", "));
        assert_eq!(cli.end.as_deref(), Some("!"));
    }

    #[test]
    fn sep_conflicts_with_no_sep() {
        let result = Cli::try_parse_from(["printkit", "--sep", ",", "--no-sep", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn raw_conflicts_with_end() {
        let result = Cli::try_parse_from(["printkit", "--raw", "--end", "!", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["printkit", "--quiet", "--verbose", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn output_stderr_parses() {
        let cli = Cli::parse_from(["printkit", "--output", "stderr", "x"]);
        assert_eq!(cli.output, Some(Stream::Stderr));
    }

    #[test]
    fn empty_invocation_is_valid() {
        let cli = Cli::parse_from(["printkit"]);
        assert!(cli.values.is_empty());
    }
}
