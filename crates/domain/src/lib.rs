//! Domain layer for meterbook.
//!
//! This crate turns a command's tokens into a typed record and routes it
//! to the matching store:
//! - `flags` scans flag/value tokens into a [`FieldMap`]
//! - `address` splits a place's address into street and house number
//! - `builder` assembles a [`Vendor`], [`Place`] or [`Settlement`]
//! - `dispatcher` runs the requested [`Action`] against the right store

pub mod address;
pub mod builder;
pub mod dispatcher;
pub mod error;
pub mod flags;
pub mod record;

pub use address::split_address;
pub use builder::build_record;
pub use common::{Action, EntityKind};
pub use dispatcher::{Dispatcher, Outcome, parse_entity};
pub use error::{CommandError, Result};
pub use flags::{Field, FieldMap, scan};
pub use record::{AnyRecord, Place, Settlement, Vendor};
