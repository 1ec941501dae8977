use common::EntityKind;
use record_store::Record;
use serde::{Deserialize, Serialize};

/// A meter reading linking a vendor to a place on a date.
///
/// Vendor and place are referenced by name and stored by value. A
/// settlement has no name of its own, so stores append settlements
/// without a uniqueness check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settlement {
    pub vendor_name: String,
    pub place_name: String,
    pub meter_status: String,
    pub date: String,
}

impl Settlement {
    pub fn new(
        vendor_name: impl Into<String>,
        place_name: impl Into<String>,
        meter_status: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            vendor_name: vendor_name.into(),
            place_name: place_name.into(),
            meter_status: meter_status.into(),
            date: date.into(),
        }
    }
}

impl Record for Settlement {
    const KIND: EntityKind = EntityKind::Settlement;

    fn name(&self) -> Option<&str> {
        None
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Settlement vendor={} place={} meter_status={} date={}",
            self.vendor_name, self.place_name, self.meter_status, self.date
        )
    }
}
