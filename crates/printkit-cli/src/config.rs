//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, or the platform config dir)
//! 3. Built-in defaults (always present)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Stream;
use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Default printing options, overridable per invocation.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Defaults for the printing flags.
///
/// `None` means "no override": the built-in space separator and newline
/// terminator apply.  TOML string escapes (`"\t"`, `"\n"`) work here, so
/// these values are taken literally, unlike the CLI flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub sep: Option<String>,
    pub end: Option<String>,
    pub flush: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub no_color: bool,
    pub stream: Stream,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// `config_file` is the path the user passed via `--config`.  An explicit
    /// path that does not exist is an error; a missing file at the default
    /// location just means built-in defaults.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        match config_file {
            Some(path) => Self::read_file(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::read_file(&path)
                } else {
                    debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn read_file(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            message: format!("cannot read '{}'", path.display()),
            source: Some(Box::new(e)),
        })?;
        let config: Self = toml::from_str(&text).map_err(|e| CliError::ConfigError {
            message: format!("cannot parse '{}'", path.display()),
            source: Some(Box::new(e)),
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.printkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "printkit", "printkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".printkit.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_have_no_overrides() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.sep.is_none());
        assert!(cfg.defaults.end.is_none());
        assert!(cfg.defaults.flush.is_none());
        assert_eq!(cfg.output.stream, Stream::Stdout);
    }

    #[test]
    fn parse_full_file() {
        let toml = r#"
            [defaults]
            sep = ", "
            end = "\n\n"
            flush = true

            [output]
            no_color = true
            stream = "stderr"
        "#;
        let cfg: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.defaults.sep.as_deref(), Some(", "));
        assert_eq!(cfg.defaults.end.as_deref(), Some("\n\n"));
        assert_eq!(cfg.defaults.flush, Some(true));
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.stream, Stream::Stderr);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg: AppConfig = toml::from_str("[defaults]\nsep = \"-\"\n").unwrap();
        assert_eq!(cfg.defaults.sep.as_deref(), Some("-"));
        assert!(cfg.defaults.end.is_none());
        assert_eq!(cfg.output.stream, Stream::Stdout);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = toml::from_str::<AppConfig>("[defaults]\nseperator = \"-\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = AppConfig::load(Some(&PathBuf::from("/nonexistent/printkit.toml")));
        assert!(matches!(err, Err(CliError::ConfigError { .. })));
    }

    #[test]
    fn explicit_file_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nsep = \"; \"").unwrap();
        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.defaults.sep.as_deref(), Some("; "));
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
