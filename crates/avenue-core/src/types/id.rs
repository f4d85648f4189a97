//! Newtype wrappers for all record identifiers.
//!
//! Using distinct types prevents accidentally passing a `FileId` where a
//! `FolderId` is expected. Folder and file ids are opaque strings on the
//! wire (UUIDs when minted by this crate); user ids are positive integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Macro to define a newtype ID wrapper around an opaque string.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Mint a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner string value.
            pub fn into_inner(self) -> String {
                self.0
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

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_from(s.to_string())
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if value.trim().is_empty() {
                    return Err(ValidationError::new(
                        stringify!($name),
                        "identifier must not be empty",
                    ));
                }
                Ok(Self(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

define_string_id!(
    /// Unique identifier for a folder.
    FolderId
);

define_string_id!(
    /// Unique identifier for a file.
    FileId
);

/// Unique identifier for a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Create a user id, rejecting zero and negative values.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::new(
                "UserId",
                format!("must be a positive integer, got {value}"),
            ));
        }
        Ok(Self(value))
    }

    /// Return the inner integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| ValidationError::new("UserId", format!("not an integer: {e}")))?;
        Self::new(value)
    }
}

impl TryFrom<i64> for UserId {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> i64 {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_id_new() {
        let id1 = FolderId::new();
        let id2 = FolderId::new();
        assert_ne!(id1, id2);
        assert!(Uuid::parse_str(id1.as_str()).is_ok());
    }

    #[test]
    fn test_folder_id_from_str() {
        let id: FolderId = "docs".parse().expect("should parse");
        assert_eq!(id.as_str(), "docs");
        assert!("  ".parse::<FolderId>().is_err());
    }

    #[test]
    fn test_user_id_rejects_non_positive() {
        assert!(UserId::new(0).is_err());
        assert!(UserId::new(-4).is_err());
        assert_eq!(UserId::new(7).map(UserId::get), Ok(7));
        assert_eq!("42".parse::<UserId>().map(UserId::get), Ok(42));
    }

    #[test]
    fn test_serde_checks_values() {
        let id: FileId = "f-1".parse().expect("should parse");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"f-1\"");

        let user = UserId::new(3).expect("valid id");
        assert_eq!(serde_json::to_string(&user).expect("serialize"), "3");

        assert!(serde_json::from_str::<UserId>("0").is_err());
        assert!(serde_json::from_str::<FolderId>("\"\"").is_err());
    }
}
