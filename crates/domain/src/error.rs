//! Command error types.

use common::{Action, EntityKind};
use record_store::StoreError;
use thiserror::Error;

/// Errors that can occur while interpreting or dispatching a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A token matched no known flag alias.
    #[error("parameter '{token}' not recognized, type 'help' for the list of flags")]
    UnrecognizedFlag { token: String },

    /// A flag ran out of tokens before all of its values were read.
    #[error("flag '{flag}' expects {expected} value(s), found {found}")]
    MissingFlagValue {
        flag: String,
        expected: usize,
        found: usize,
    },

    /// The entity keyword names no known record kind.
    #[error("unknown entity '{keyword}', expected one of: vendor, place, settlement")]
    UnknownEntity { keyword: String },

    /// The action is not defined for this record kind.
    #[error("{action} is not supported for {kind} records")]
    UnsupportedAction { kind: EntityKind, action: Action },

    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, CommandError>;
