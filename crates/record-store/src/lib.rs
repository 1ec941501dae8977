pub mod error;
pub mod memory;
pub mod record;
pub mod store;

pub use common::EntityKind;
pub use error::{Result, StoreError};
pub use memory::InMemoryStore;
pub use record::Record;
pub use store::{RecordStore, validate_for_add};
