use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The record kinds a command can target.
///
/// The keyword form (`vendor`, `place`, `settlement`) is what appears as the
/// first token of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Vendor,
    Place,
    Settlement,
}

impl EntityKind {
    /// All kinds, in the order they are listed in help output.
    pub const ALL: [EntityKind; 3] = [Self::Vendor, Self::Place, Self::Settlement];

    /// Returns the command keyword for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Vendor => "vendor",
            Self::Place => "place",
            Self::Settlement => "settlement",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for EntityKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vendor" => Ok(Self::Vendor),
            "place" => Ok(Self::Place),
            "settlement" => Ok(Self::Settlement),
            other => Err(ParseKindError::Entity(other.to_string())),
        }
    }
}

/// The operation requested on an entity's store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add,
    Remove,
    Show,
}

impl Action {
    pub const ALL: [Action; 3] = [Self::Add, Self::Remove, Self::Show];

    /// Returns the command word for this action.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Show => "show",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Action {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            "show" => Ok(Self::Show),
            other => Err(ParseKindError::Action(other.to_string())),
        }
    }
}

/// Returned when a keyword names no known entity or action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKindError {
    #[error("unknown entity '{0}', expected one of: vendor, place, settlement")]
    Entity(String),

    #[error("unknown action '{0}', expected one of: add, remove, show")]
    Action(String),
}
