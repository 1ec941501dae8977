use common::EntityKind;
use record_store::Record;
use serde::{Deserialize, Serialize};

/// A metered location, unique by name.
///
/// `street` and `house_number` are only known for places built by an add
/// command; records built for remove or show leave them unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub postcode: String,
    pub city: String,
}

impl Place {
    /// Creates a place without address details.
    pub fn new(
        name: impl Into<String>,
        postcode: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            street: None,
            house_number: None,
            postcode: postcode.into(),
            city: city.into(),
        }
    }

    /// Sets the street and house number.
    pub fn with_address(
        mut self,
        street: impl Into<String>,
        house_number: impl Into<String>,
    ) -> Self {
        self.street = Some(street.into());
        self.house_number = Some(house_number.into());
        self
    }
}

impl Record for Place {
    const KIND: EntityKind = EntityKind::Place;

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Place name={} street={} house_number={} postcode={} city={}",
            self.name,
            self.street.as_deref().unwrap_or("-"),
            self.house_number.as_deref().unwrap_or("-"),
            self.postcode,
            self.city
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_address_when_present() {
        let place = Place::new("Home", "NW1", "London").with_address("Baker", "221B");
        assert_eq!(
            place.to_string(),
            "Place name=Home street=Baker house_number=221B postcode=NW1 city=London"
        );
    }

    #[test]
    fn renders_dash_for_missing_address() {
        let place = Place::new("Home", "NW1", "London");
        assert_eq!(
            place.to_string(),
            "Place name=Home street=- house_number=- postcode=NW1 city=London"
        );
    }
}
