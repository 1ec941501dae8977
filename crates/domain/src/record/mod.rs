//! Record types held by the stores.

mod place;
mod settlement;
mod vendor;

pub use place::Place;
pub use settlement::Settlement;
pub use vendor::Vendor;

use serde::{Deserialize, Serialize};

/// A record of any kind, as built from a command or listed from a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnyRecord {
    Vendor(Vendor),
    Place(Place),
    Settlement(Settlement),
}

impl std::fmt::Display for AnyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vendor(v) => write!(f, "{v}"),
            Self::Place(p) => write!(f, "{p}"),
            Self::Settlement(s) => write!(f, "{s}"),
        }
    }
}

impl From<Vendor> for AnyRecord {
    fn from(vendor: Vendor) -> Self {
        Self::Vendor(vendor)
    }
}

impl From<Place> for AnyRecord {
    fn from(place: Place) -> Self {
        Self::Place(place)
    }
}

impl From<Settlement> for AnyRecord {
    fn from(settlement: Settlement) -> Self {
        Self::Settlement(settlement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_kind_tag() {
        let record = AnyRecord::from(Vendor::new("Acme", "Water"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "vendor", "name": "Acme", "service": "Water"})
        );
    }

    #[test]
    fn display_delegates_to_record() {
        let vendor = Vendor::new("Acme", "Water");
        assert_eq!(AnyRecord::from(vendor.clone()).to_string(), vendor.to_string());
    }
}
