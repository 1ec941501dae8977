use common::EntityKind;
use record_store::Record;
use serde::{Deserialize, Serialize};

/// A service provider, unique by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vendor {
    pub name: String,
    pub service: String,
}

impl Vendor {
    pub fn new(name: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            service: service.into(),
        }
    }
}

impl Record for Vendor {
    const KIND: EntityKind = EntityKind::Vendor;

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vendor name={} service={}", self.name, self.service)
    }
}
