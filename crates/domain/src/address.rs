//! Address decomposition for places.

/// Splits an `-address` value into `(street, house_number)`.
///
/// The value is two tokens joined by one space, street first. The split
/// happens at the last space, so a street token that itself contains
/// spaces still yields the right house number. A value without any space
/// is taken as the street with an empty house number.
pub fn split_address(address: &str) -> (String, String) {
    match address.rsplit_once(' ') {
        Some((street, house_number)) => (street.to_string(), house_number.to_string()),
        None => (address.to_string(), String::new()),
    }
}
