//! Record assembly from scanned fields.

use common::{Action, EntityKind};

use crate::address::split_address;
use crate::flags::{Field, FieldMap};
use crate::record::{AnyRecord, Place, Settlement, Vendor};

/// Builds the record a command describes.
///
/// Unsupplied fields are left empty and nothing is validated here; the
/// stores enforce naming rules when the record is dispatched. A place's
/// street and house number are only filled in for [`Action::Add`].
pub fn build_record(kind: EntityKind, action: Action, fields: &FieldMap) -> AnyRecord {
    match kind {
        EntityKind::Vendor => {
            Vendor::new(fields.value(Field::Name), fields.value(Field::Service)).into()
        }
        EntityKind::Place => {
            let place = Place::new(
                fields.value(Field::Name),
                fields.value(Field::Postcode),
                fields.value(Field::City),
            );
            match action {
                Action::Add => {
                    let (street, house_number) = fields
                        .get(Field::Address)
                        .map(split_address)
                        .unwrap_or_default();
                    place.with_address(street, house_number).into()
                }
                Action::Remove | Action::Show => place.into(),
            }
        }
        EntityKind::Settlement => Settlement::new(
            fields.value(Field::VendorName),
            fields.value(Field::PlaceName),
            fields.value(Field::MeterStatus),
            fields.value(Field::Date),
        )
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::scan;

    #[test]
    fn builds_vendor() {
        let fields = scan(&["-n", "Acme", "-s", "Water"]).unwrap();
        let record = build_record(EntityKind::Vendor, Action::Add, &fields);
        assert_eq!(record, AnyRecord::Vendor(Vendor::new("Acme", "Water")));
    }

    #[test]
    fn builds_place_with_address_for_add() {
        let fields = scan(&[
            "-n", "Home", "-a", "Baker", "221B", "-p", "NW1", "-c", "London",
        ])
        .unwrap();
        let record = build_record(EntityKind::Place, Action::Add, &fields);
        assert_eq!(
            record,
            AnyRecord::Place(Place::new("Home", "NW1", "London").with_address("Baker", "221B"))
        );
    }

    #[test]
    fn place_address_is_ignored_outside_add() {
        let fields = scan(&["-n", "Home", "-a", "Baker", "221B"]).unwrap();
        for action in [Action::Remove, Action::Show] {
            let AnyRecord::Place(place) = build_record(EntityKind::Place, action, &fields) else {
                panic!("expected a place");
            };
            assert_eq!(place.street, None);
            assert_eq!(place.house_number, None);
        }
    }

    #[test]
    fn place_add_without_address_leaves_parts_empty() {
        let fields = scan(&["-n", "Home"]).unwrap();
        let AnyRecord::Place(place) = build_record(EntityKind::Place, Action::Add, &fields) else {
            panic!("expected a place");
        };
        assert_eq!(place.street.as_deref(), Some(""));
        assert_eq!(place.house_number.as_deref(), Some(""));
    }

    #[test]
    fn builds_settlement() {
        let fields = scan(&[
            "-vn", "Acme", "-pn", "Home", "-ms", "1234", "-d", "2024-01-31",
        ])
        .unwrap();
        let record = build_record(EntityKind::Settlement, Action::Add, &fields);
        assert_eq!(
            record,
            AnyRecord::Settlement(Settlement::new("Acme", "Home", "1234", "2024-01-31"))
        );
    }

    #[test]
    fn unsupplied_fields_are_empty() {
        let record = build_record(EntityKind::Vendor, Action::Add, &FieldMap::new());
        assert_eq!(record, AnyRecord::Vendor(Vendor::default()));
    }

    #[test]
    fn unrelated_fields_are_ignored() {
        let fields = scan(&["-n", "Acme", "-c", "London", "-ms", "9"]).unwrap();
        let record = build_record(EntityKind::Vendor, Action::Add, &fields);
        assert_eq!(record, AnyRecord::Vendor(Vendor::new("Acme", "")));
    }
}
