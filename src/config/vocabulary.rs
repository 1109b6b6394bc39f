// src/config/vocabulary.rs
use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ConsoleError;

/// The categorical inputs a module can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Class,
    Name,
    Year,
    Mtu,
}

impl FieldKey {
    pub const ALL: [FieldKey; 4] = [FieldKey::Class, FieldKey::Name, FieldKey::Year, FieldKey::Mtu];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Class => "class",
            FieldKey::Name => "name",
            FieldKey::Year => "year",
            FieldKey::Mtu => "mtu",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ConsoleError::InvalidFieldKey(s.to_string()))
    }
}

/// Fixed option lists for every input field, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldVocabulary {
    fields: BTreeMap<FieldKey, Vec<String>>,
}

impl FieldVocabulary {
    pub fn new(fields: BTreeMap<FieldKey, Vec<String>>) -> Self {
        Self { fields }
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.fields.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.fields.keys().copied()
    }

    pub fn options(&self, key: FieldKey) -> &[String] {
        self.fields.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Parses a raw key coming from the presentation layer and checks that the
    /// vocabulary actually carries it.
    pub fn parse_key(&self, raw: &str) -> Result<FieldKey, ConsoleError> {
        let key = raw.parse::<FieldKey>()?;
        if self.contains(key) {
            Ok(key)
        } else {
            Err(ConsoleError::InvalidFieldKey(raw.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> FieldVocabulary {
        let mut fields = BTreeMap::new();
        fields.insert(FieldKey::Class, vec!["Class Alpha".to_string(), "Class Beta".to_string()]);
        fields.insert(FieldKey::Year, vec!["2023".to_string()]);
        FieldVocabulary::new(fields)
    }

    #[test]
    fn parses_lowercase_keys_only() {
        assert_eq!("mtu".parse::<FieldKey>(), Ok(FieldKey::Mtu));
        assert_eq!(
            "MTU".parse::<FieldKey>(),
            Err(ConsoleError::InvalidFieldKey("MTU".to_string()))
        );
    }

    #[test]
    fn rejects_keys_missing_from_vocabulary() {
        let vocab = vocabulary();
        assert_eq!(vocab.parse_key("class"), Ok(FieldKey::Class));
        assert_eq!(
            vocab.parse_key("name"),
            Err(ConsoleError::InvalidFieldKey("name".to_string()))
        );
        assert_eq!(
            vocab.parse_key("colour"),
            Err(ConsoleError::InvalidFieldKey("colour".to_string()))
        );
    }

    #[test]
    fn keys_follow_field_order() {
        let keys: Vec<_> = vocabulary().keys().collect();
        assert_eq!(keys, vec![FieldKey::Class, FieldKey::Year]);
        assert!(vocabulary().options(FieldKey::Mtu).is_empty());
    }
}
