//! Shared types for the meterbook workspace.

pub mod types;

pub use types::{Action, EntityKind, ParseKindError};
