use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub trait Entity {
    fn id(&self) -> &ID;
}

/// Identifier assigned by storage when a record is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ID(i64);

impl ID {
    pub fn inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for ID {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| InvalidIDError::Malformed(s.to_string()))
    }
}

impl Serialize for ID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for ID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IDVisitor;

        impl<'de> Visitor<'de> for IDVisitor {
            type Value = ID;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("An integer id or its string representation")
            }

            fn visit_i64<E>(self, value: i64) -> Result<ID, E>
            where
                E: serde::de::Error,
            {
                Ok(ID(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<ID, E>
            where
                E: serde::de::Error,
            {
                i64::try_from(value)
                    .map(ID)
                    .map_err(|_| E::custom(format!("Malformed id: {}", value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<ID, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<ID>()
                    .map_err(|_| E::custom(format!("Malformed id: {}", value)))
            }
        }

        deserializer.deserialize_any(IDVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_ids_from_numbers_and_strings() {
        let ids: Vec<ID> = serde_json::from_str(r#"[1, "2", " 3 "]"#).unwrap();
        assert_eq!(ids, vec![ID::from(1), ID::from(2), ID::from(3)]);
    }

    #[test]
    fn it_rejects_malformed_ids() {
        assert!(serde_json::from_str::<ID>(r#""abc""#).is_err());
        assert!(serde_json::from_str::<ID>("1.5").is_err());
        assert!("".parse::<ID>().is_err());
    }

    #[test]
    fn it_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ID::from(42)).unwrap(), "42");
    }
}
