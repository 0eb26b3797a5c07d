//! Strongly-typed ID wrappers
//!
//! Send identifiers are case-insensitive tokens. They are lower-cased on every
//! construction path, so two ids that differ only in case compare equal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate case-insensitive token ID wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Parse an ID from a string, normalizing its case
            pub fn parse(s: &str) -> Self {
                Self(s.trim().to_lowercase())
            }

            /// Get the normalized token
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::parse(&s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid.to_string())
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::parse(s))
            }
        }
    };
}

define_id!(SendId);
define_id!(FileId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_uuid() {
        let id = SendId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_parse_lowercases() {
        let id = SendId::parse("AB12cd34");
        assert_eq!(id.as_str(), "ab12cd34");
        assert_eq!(id, SendId::parse("ab12CD34"));
    }

    #[test]
    fn test_id_equality() {
        let id1 = SendId::new();
        let id2 = id1.clone();
        assert_eq!(id1, id2);
        assert_ne!(id1, SendId::new());
    }

    #[test]
    fn test_deserialization_normalizes() {
        let id: SendId = serde_json::from_str("\"X1-ABC\"").unwrap();
        assert_eq!(id.to_string(), "x1-abc");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"x1-abc\"");
    }

    #[test]
    fn test_from_str() {
        let id: FileId = " F00D ".parse().unwrap();
        assert_eq!(id.as_str(), "f00d");
    }
}
