//! Application configuration loaded from environment variables.

use std::str::FromStr;

use thiserror::Error;

/// A format setting that names no known format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {setting} '{value}', expected one of: {expected}")]
pub struct ParseFormatError {
    setting: &'static str,
    value: String,
    expected: &'static str,
}

/// How `show` listings are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One rendered line per record.
    #[default]
    Text,
    /// One JSON object per line, tagged with the record kind.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ParseFormatError {
                setting: "output format",
                value: s.to_string(),
                expected: "text, json",
            }),
        }
    }
}

/// Formatter used for log lines on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ParseFormatError {
                setting: "log format",
                value: s.to_string(),
                expected: "compact, json",
            }),
        }
    }
}

/// Prompt configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `MB_PROMPT`: prompt printed before each line (default: `"> "`)
/// - `MB_OUTPUT`: `text` or `json` listings (default: `text`)
/// - `MB_LOG_FORMAT`: `compact` or `json` logs (default: `compact`)
/// - `RUST_LOG`: tracing filter directive (default: `"warn"`)
///
/// Unparseable values fall back to the default.
#[derive(Debug, Clone)]
pub struct Config {
    pub prompt: String,
    pub output: OutputFormat,
    pub log_format: LogFormat,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            prompt: lookup("MB_PROMPT").unwrap_or(defaults.prompt),
            output: lookup("MB_OUTPUT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.output),
            log_format: lookup("MB_LOG_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_format),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            output: OutputFormat::Text,
            log_format: LogFormat::Compact,
            log_level: "warn".to_string(),
        }
    }
}
