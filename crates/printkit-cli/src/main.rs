//! # Printkit CLI
//!
//! Echo-like front-end for the printkit emission engine.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + defaults).
//! 4. Resolve the printing options and emit the values.
//! 5. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success (incl. broken pipe downstream) |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use printkit_core::{Glue, PrintOptions, Sink};
use printkit_sinks::{StderrSink, StdoutSink};

use crate::{
    cli::{Cli, Stream},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
};

mod cli;
mod config;
mod error;
mod logging;

fn main() -> ExitCode {
    // Load .env before anything else — including tracing init.
    // Silently ignored if .env doesn't exist (production deployments
    // use real environment variables, not .env files).
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap handles --help / --version and exits automatically; errors here
    // are argument-parse failures (exit 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version surface as Err from try_parse; they go to
            // stdout and exit 0, per convention.
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                let _ = e.print();
                return ExitCode::SUCCESS;
            }
            // Render clap's own error (already user-friendly) and exit 2.
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.verbose > 0;

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let stderr_is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            // Config failed to load, so only the flag can disable colour here.
            let use_color = color_enabled(cli.global.no_color, stderr_is_tty);
            return handle_error(e, verbose, use_color);
        }
    };

    let use_color = color_enabled(
        cli.global.no_color || config.output.no_color,
        stderr_is_tty,
    );

    // ── 4. Emit + 5. Error handling ───────────────────────────────────────
    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e, verbose, use_color),
    }
}

/// Whether error output may use ANSI colour.
///
/// `--no-color`, the `NO_COLOR` environment variable (via clap), and the
/// config file's `output.no_color` all feed the first argument; a
/// non-terminal stderr disables colour unconditionally.
fn color_enabled(no_color: bool, stderr_is_tty: bool) -> bool {
    !no_color && stderr_is_tty
}

/// Resolve the printing options and emit the values.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig) -> CliResult<()> {
    // Precedence per option: CLI flag > config file > built-in default.
    // CLI values pass through `unescape` so `--sep '\t'` works from a shell;
    // config values are TOML strings, which carry their own escapes.
    let sep = if cli.raw || cli.no_sep {
        None
    } else if let Some(s) = &cli.sep {
        Some(unescape(s)?)
    } else if let Some(s) = &config.defaults.sep {
        Some(s.clone())
    } else {
        Some(" ".to_owned())
    };

    let end = if cli.raw || cli.no_end {
        None
    } else if let Some(s) = &cli.end {
        Some(unescape(s)?)
    } else if let Some(s) = &config.defaults.end {
        Some(s.clone())
    } else {
        Some("\n".to_owned())
    };

    let flush = cli.flush || config.defaults.flush.unwrap_or(false);
    let stream = cli.output.unwrap_or(config.output.stream);

    debug!(?sep, ?end, flush, %stream, values = cli.values.len(), "resolved print options");

    let mut sink: Box<dyn Sink> = match stream {
        Stream::Stdout => Box::new(StdoutSink::new()),
        Stream::Stderr => Box::new(StderrSink::new()),
    };

    let sep_glue = match sep.as_ref() {
        Some(s) => Glue::Text(s),
        None => Glue::Nothing,
    };
    let end_glue = match end.as_ref() {
        Some(s) => Glue::Text(s),
        None => Glue::Nothing,
    };

    let mut emitter = PrintOptions::raw()
        .sep(sep_glue)
        .end(end_glue)
        .file(sink.as_mut())
        .flush(flush)
        .into_emitter();
    for value in &cli.values {
        emitter = emitter.value(value);
    }
    emitter.finish()?;

    Ok(())
}

/// Expand backslash escapes in a CLI-supplied string.
///
/// Shells pass `--sep '\t'` through as two characters; this turns them back
/// into the single control character the user meant.
///
/// `\xHH` denotes the Unicode code point U+00HH (Latin-1), so values above
/// `\x7f` encode as two UTF-8 bytes rather than one raw byte — the output is
/// always valid UTF-8.
fn unescape(input: &str) -> CliResult<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                if hex.chars().count() != 2 {
                    return Err(CliError::InvalidInput {
                        message: "'\\x' needs two hex digits".into(),
                        source: None,
                    });
                }
                let byte = u8::from_str_radix(&hex, 16).map_err(|e| CliError::InvalidInput {
                    message: format!("'\\x{hex}' is not a hex byte"),
                    source: Some(Box::new(e)),
                })?;
                out.push(char::from(byte));
            }
            Some(other) => {
                return Err(CliError::InvalidInput {
                    message: format!("unknown escape '\\{other}'"),
                    source: None,
                });
            }
            None => {
                return Err(CliError::InvalidInput {
                    message: "trailing backslash".into(),
                    source: None,
                });
            }
        }
    }

    Ok(out)
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes — the format/suggestion machinery in `CliError`
/// is all exercised here.
fn handle_error(err: CliError, verbose: bool, use_color: bool) -> ExitCode {
    // A broken pipe just means the reader went away; standard behaviour for
    // line-producing tools is a silent, successful exit.
    if err.is_broken_pipe() {
        debug!("output pipe closed early");
        return ExitCode::SUCCESS;
    }

    // 1. Emit a structured log event at the right severity.
    err.log();

    // 2. Print a user-friendly message.  We write directly to stderr so the
    //    message appears even when stdout is redirected.
    let msg = if use_color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // Clap's internal consistency check — catches missing values, conflicts, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }

    // ── colour resolution ─────────────────────────────────────────────────

    #[test]
    fn color_requires_a_tty() {
        assert!(color_enabled(false, true));
        assert!(!color_enabled(false, false));
    }

    #[test]
    fn no_color_wins_over_a_tty() {
        // Covers the flag, NO_COLOR, and the config file's output.no_color,
        // which are all folded into the first argument.
        assert!(!color_enabled(true, true));
    }

    // ── unescape ──────────────────────────────────────────────────────────

    #[test]
    fn unescape_passthrough() {
        assert_eq!(unescape("plain text").unwrap(), "plain text");
    }

    #[test]
    fn unescape_controls() {
        assert_eq!(unescape("a\\tb\\n").unwrap(), "a\tb\n");
        assert_eq!(unescape("\\r\\0\\\\").unwrap(), "\r\0\\");
    }

    #[test]
    fn unescape_hex() {
        assert_eq!(unescape("\\x41\\x2c").unwrap(), "A,");
    }

    #[test]
    fn unescape_high_hex_is_latin1() {
        // \xe9 is U+00E9, two bytes in UTF-8.
        assert_eq!(unescape("\\xe9").unwrap(), "\u{e9}");
        assert_eq!(unescape("\\xe9").unwrap().len(), 2);
    }

    #[test]
    fn unescape_rejects_unknown() {
        assert!(matches!(
            unescape("\\q"),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn unescape_rejects_short_hex() {
        assert!(unescape("\\x4").is_err());
        assert!(unescape("\\xzz").is_err());
    }

    #[test]
    fn unescape_rejects_trailing_backslash() {
        assert!(unescape("abc\\").is_err());
    }
}
