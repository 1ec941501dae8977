//! Flag scanning.
//!
//! A command's argument list is a sequence of `-flag value` pairs. Every
//! flag has a long and a short alias; `-address` takes two values, every
//! other flag takes one.

use std::collections::BTreeMap;

use crate::error::{CommandError, Result};

/// A logical field that a flag sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Address,
    City,
    Date,
    MeterStatus,
    Name,
    Service,
    Postcode,
    PlaceName,
    VendorName,
}

impl Field {
    /// All fields, in the order they are listed in help output.
    pub const ALL: [Field; 9] = [
        Self::Address,
        Self::City,
        Self::Date,
        Self::MeterStatus,
        Self::Name,
        Self::Service,
        Self::Postcode,
        Self::PlaceName,
        Self::VendorName,
    ];

    pub fn long(&self) -> &'static str {
        match self {
            Self::Address => "-address",
            Self::City => "-city",
            Self::Date => "-date",
            Self::MeterStatus => "-meter_status",
            Self::Name => "-name",
            Self::Service => "-service",
            Self::Postcode => "-postcode",
            Self::PlaceName => "-place_name",
            Self::VendorName => "-vendor_name",
        }
    }

    pub fn short(&self) -> &'static str {
        match self {
            Self::Address => "-a",
            Self::City => "-c",
            Self::Date => "-d",
            Self::MeterStatus => "-ms",
            Self::Name => "-n",
            Self::Service => "-s",
            Self::Postcode => "-p",
            Self::PlaceName => "-pn",
            Self::VendorName => "-vn",
        }
    }

    /// Number of value tokens the flag consumes.
    pub fn arity(&self) -> usize {
        match self {
            Self::Address => 2,
            _ => 1,
        }
    }

    /// Resolves a long or short alias to its field.
    pub fn from_alias(alias: &str) -> Option<Field> {
        Self::ALL
            .into_iter()
            .find(|field| field.long() == alias || field.short() == alias)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long())
    }
}

/// Field values collected from a command's flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    values: BTreeMap<Field, String>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any earlier value.
    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Returns the field's value, or an empty string if it was not supplied.
    pub fn value(&self, field: Field) -> String {
        self.get(field).unwrap_or_default().to_string()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Scans a flag/value token list into a [`FieldMap`].
///
/// Tokens are read left to right. Value tokens are taken verbatim, even
/// when they look like a flag. A repeated flag keeps its last value; the
/// two address tokens are joined with a single space.
pub fn scan(tokens: &[&str]) -> Result<FieldMap> {
    let mut fields = FieldMap::new();
    let mut tokens = tokens.iter();

    while let Some(&alias) = tokens.next() {
        let field = Field::from_alias(alias).ok_or_else(|| CommandError::UnrecognizedFlag {
            token: alias.to_string(),
        })?;

        let values: Vec<&str> = tokens.by_ref().take(field.arity()).copied().collect();
        if values.len() < field.arity() {
            return Err(CommandError::MissingFlagValue {
                flag: alias.to_string(),
                expected: field.arity(),
                found: values.len(),
            });
        }

        fields.insert(field, values.join(" "));
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_alias_resolves_to_its_field() {
        for field in Field::ALL {
            assert_eq!(Field::from_alias(field.long()), Some(field));
            assert_eq!(Field::from_alias(field.short()), Some(field));
        }
    }

    #[test]
    fn aliases_are_distinct() {
        let mut aliases: Vec<_> = Field::ALL
            .iter()
            .flat_map(|f| [f.long(), f.short()])
            .collect();
        aliases.sort_unstable();
        aliases.dedup();
        assert_eq!(aliases.len(), Field::ALL.len() * 2);
    }

    #[test]
    fn long_and_short_aliases_are_interchangeable() {
        let long = scan(&["-name", "X", "-service", "Y"]).unwrap();
        let short = scan(&["-n", "X", "-s", "Y"]).unwrap();
        let mixed = scan(&["-n", "X", "-service", "Y"]).unwrap();
        assert_eq!(long, short);
        assert_eq!(long, mixed);
        assert_eq!(long.get(Field::Name), Some("X"));
        assert_eq!(long.get(Field::Service), Some("Y"));
    }

    #[test]
    fn address_joins_two_tokens() {
        let fields = scan(&["-a", "Street", "221B"]).unwrap();
        assert_eq!(fields.get(Field::Address), Some("Street 221B"));
    }

    #[test]
    fn last_occurrence_wins() {
        let fields = scan(&["-n", "A", "-n", "B"]).unwrap();
        assert_eq!(fields.get(Field::Name), Some("B"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn value_tokens_are_taken_verbatim() {
        let fields = scan(&["-n", "-s", "-s", "Water"]).unwrap();
        assert_eq!(fields.get(Field::Name), Some("-s"));
        assert_eq!(fields.get(Field::Service), Some("Water"));
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = scan(&["-x", "1"]).unwrap_err();
        assert_eq!(
            err,
            CommandError::UnrecognizedFlag {
                token: "-x".to_string()
            }
        );
    }

    #[test]
    fn scanning_stops_at_first_unknown_token() {
        let err = scan(&["-n", "A", "bogus", "-y"]).unwrap_err();
        assert_eq!(
            err,
            CommandError::UnrecognizedFlag {
                token: "bogus".to_string()
            }
        );
    }

    #[test]
    fn trailing_flag_without_value_is_rejected() {
        let err = scan(&["-n", "A", "-s"]).unwrap_err();
        assert_eq!(
            err,
            CommandError::MissingFlagValue {
                flag: "-s".to_string(),
                expected: 1,
                found: 0,
            }
        );
    }

    #[test]
    fn address_with_one_token_is_rejected() {
        let err = scan(&["-address", "Baker"]).unwrap_err();
        assert_eq!(
            err,
            CommandError::MissingFlagValue {
                flag: "-address".to_string(),
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn empty_token_list_yields_empty_map() {
        let fields = scan(&[]).unwrap();
        assert!(fields.is_empty());
        assert_eq!(fields.value(Field::Name), "");
    }
}
