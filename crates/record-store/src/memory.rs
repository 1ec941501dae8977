use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    Record, Result, StoreError,
    store::{RecordStore, validate_for_add},
};

/// In-memory record store.
///
/// Records are kept in insertion order, which is also the order returned
/// by `list_all`. Clones share the same underlying records.
#[derive(Clone)]
pub struct InMemoryStore<R: Record> {
    records: Arc<RwLock<Vec<R>>>,
}

impl<R: Record> InMemoryStore<R> {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<R: Record> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> std::fmt::Debug for InMemoryStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("kind", &R::KIND)
            .field("len", &self.len())
            .finish()
    }
}

impl<R: Record> RecordStore<R> for InMemoryStore<R> {
    fn add(&self, record: R) -> Result<()> {
        validate_for_add(&record)?;

        // Check and insert under one guard so concurrent adds cannot both pass.
        let mut records = self.records.write();

        if let Some(name) = record.name()
            && records.iter().any(|r| r.name() == Some(name))
        {
            return Err(StoreError::DuplicateName {
                kind: R::KIND,
                name: name.to_string(),
            });
        }

        records.push(record);
        tracing::trace!(kind = %R::KIND, len = records.len(), "record added");
        Ok(())
    }

    fn remove_by_name(&self, name: &str) -> Result<R> {
        let mut records = self.records.write();
        let position = records
            .iter()
            .position(|r| r.name() == Some(name))
            .ok_or_else(|| StoreError::NameNotFound {
                kind: R::KIND,
                name: name.to_string(),
            })?;

        // `remove` keeps the remaining records in insertion order.
        let removed = records.remove(position);
        tracing::trace!(kind = %R::KIND, len = records.len(), "record removed");
        Ok(removed)
    }

    fn list_all(&self) -> Result<Vec<R>> {
        Ok(self.records.read().clone())
    }
}
