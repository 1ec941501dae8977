use thiserror::Error;

use crate::EntityKind;

/// Errors that can occur when interacting with a record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with the same name is already stored.
    #[error("{kind} '{name}' already exists")]
    DuplicateName { kind: EntityKind, name: String },

    /// No record with the given name is stored.
    #[error("{kind} '{name}' does not exist")]
    NameNotFound { kind: EntityKind, name: String },

    /// A keyed record was added without a name.
    #[error("{kind} name must not be empty")]
    EmptyName { kind: EntityKind },
}

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
