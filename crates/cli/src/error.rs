//! Prompt error types.

use common::{Action, ParseKindError};
use domain::CommandError;
use thiserror::Error;

/// Errors that can occur while handling a prompt line.
///
/// `Io`, `Readline` and `Serialization` end the session; every other variant is
/// reported and the prompt moves on to the next line.
#[derive(Debug, Error)]
pub enum CliError {
    /// The first word was not a known action or built-in.
    #[error("{0}, type 'help' for usage")]
    UnknownAction(ParseKindError),

    /// A quoted value was not closed.
    #[error("unbalanced quotes in '{line}'")]
    UnbalancedQuotes { line: String },

    /// An input line was not valid UTF-8.
    #[error("input line is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// An action was given without an entity keyword.
    #[error("'{action}' needs an entity: vendor, place or settlement")]
    MissingEntity { action: Action },

    /// The command itself was rejected.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal line editor failed.
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// A record could not be rendered as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Whether the prompt should keep reading after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Io(_) | Self::Readline(_) | Self::Serialization(_)
        )
    }
}

/// Result type for prompt operations.
pub type Result<T> = std::result::Result<T, CliError>;
