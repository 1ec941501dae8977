use crate::{Record, Result, StoreError};

/// Core trait for record store implementations.
///
/// A store holds every record of one entity kind. Keyed records are unique
/// by name within a store; failed operations never change the contents.
/// All implementations must be thread-safe (Send + Sync).
pub trait RecordStore<R: Record>: Send + Sync {
    /// Adds a record to the store.
    ///
    /// Fails with `DuplicateName` if a keyed record with the same name is
    /// already stored, and with `EmptyName` if the record's name is empty.
    fn add(&self, record: R) -> Result<()>;

    /// Removes the record with the given name and returns it.
    ///
    /// Fails with `NameNotFound` if no record has that name.
    fn remove_by_name(&self, name: &str) -> Result<R>;

    /// Returns all records in iteration order.
    fn list_all(&self) -> Result<Vec<R>>;
}

/// Validates a record before adding it to a store.
///
/// Unkeyed records always pass.
pub fn validate_for_add<R: Record>(record: &R) -> Result<()> {
    match record.name() {
        Some(name) if name.is_empty() => Err(StoreError::EmptyName { kind: R::KIND }),
        _ => Ok(()),
    }
}
