use crate::EntityKind;

/// A value that can be held in a [`RecordStore`](crate::RecordStore).
///
/// Keyed records return their unique name from [`Record::name`]. Records
/// that return `None` are unkeyed: a store appends them without any
/// uniqueness check and they can never be removed by name.
pub trait Record: Clone + Send + Sync + 'static {
    /// The entity kind reported in errors and logs.
    const KIND: EntityKind;

    /// Returns the record's unique name, if it has one.
    fn name(&self) -> Option<&str>;
}
