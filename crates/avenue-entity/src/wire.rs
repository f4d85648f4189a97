//! Typed access to the members of a decoded JSON record.
//!
//! Parsers read raw wire objects through [`Fields`] so that every failure is
//! reported against the exact wire name of the member that caused it.
//! JSON `null` and an absent member are treated alike.

use serde::Serialize;
use serde_json::{Map, Value};

use avenue_core::ValidationError;
use avenue_core::types::{Timestamp, UserId};

/// Serialize a record into its wire form.
pub fn to_wire<T: Serialize>(record: &T) -> Result<Value, serde_json::Error> {
    serde_json::to_value(record)
}

/// Read-only view over the members of one JSON object.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Borrow the members of `raw`, failing on `$` if it is not an object.
    pub(crate) fn of(raw: &'a Value) -> Result<Self, ValidationError> {
        raw.as_object()
            .map(|map| Self { map })
            .ok_or_else(|| ValidationError::wrong_type("$", "a JSON object"))
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name).filter(|value| !value.is_null())
    }

    pub(crate) fn required_str(&self, name: &str) -> Result<&'a str, ValidationError> {
        self.optional_str(name)?
            .ok_or_else(|| ValidationError::missing(name))
    }

    pub(crate) fn optional_str(&self, name: &str) -> Result<Option<&'a str>, ValidationError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(ValidationError::wrong_type(name, "a string")),
        }
    }

    pub(crate) fn required_bool(&self, name: &str) -> Result<bool, ValidationError> {
        self.optional_bool(name)?
            .ok_or_else(|| ValidationError::missing(name))
    }

    pub(crate) fn optional_bool(&self, name: &str) -> Result<Option<bool>, ValidationError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(ValidationError::wrong_type(name, "a boolean")),
        }
    }

    pub(crate) fn required_i64(&self, name: &str) -> Result<i64, ValidationError> {
        self.optional_i64(name)?
            .ok_or_else(|| ValidationError::missing(name))
    }

    pub(crate) fn optional_i64(&self, name: &str) -> Result<Option<i64>, ValidationError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => value
                .as_i64()
                .map(Some)
                .ok_or_else(|| ValidationError::wrong_type(name, "an integer")),
        }
    }

    /// A byte count: an integer that must not be negative.
    pub(crate) fn required_bytes(&self, name: &str) -> Result<u64, ValidationError> {
        self.optional_bytes(name)?
            .ok_or_else(|| ValidationError::missing(name))
    }

    pub(crate) fn optional_bytes(&self, name: &str) -> Result<Option<u64>, ValidationError> {
        match self.optional_i64(name)? {
            None => Ok(None),
            Some(n) if n < 0 => Err(ValidationError::new(
                name,
                format!("must not be negative, got {n}"),
            )),
            Some(n) => Ok(Some(n.unsigned_abs())),
        }
    }

    pub(crate) fn required_timestamp(&self, name: &str) -> Result<Timestamp, ValidationError> {
        self.optional_timestamp(name)?
            .ok_or_else(|| ValidationError::missing(name))
    }

    pub(crate) fn optional_timestamp(
        &self,
        name: &str,
    ) -> Result<Option<Timestamp>, ValidationError> {
        let Some(raw) = self.optional_str(name)? else {
            return Ok(None);
        };
        Timestamp::parse(raw)
            .map(Some)
            .map_err(|e| ValidationError::new(name, e.reason))
    }

    /// A user reference, given either as an integer or a decimal string.
    pub(crate) fn required_user_id(&self, name: &str) -> Result<UserId, ValidationError> {
        let value = match self.get(name) {
            None => return Err(ValidationError::missing(name)),
            Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| {
                ValidationError::wrong_type(name, "an integer or a decimal string")
            })?,
            Some(value) => value
                .as_i64()
                .ok_or_else(|| ValidationError::wrong_type(name, "an integer"))?,
        };
        UserId::new(value).map_err(|e| ValidationError::new(name, e.reason))
    }

    /// Iterate the elements of an array member.
    pub(crate) fn required_array(&self, name: &str) -> Result<&'a [Value], ValidationError> {
        match self.get(name) {
            None => Err(ValidationError::missing(name)),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(ValidationError::wrong_type(name, "an array")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_an_object() {
        let err = Fields::of(&json!([1, 2])).unwrap_err();
        assert_eq!(err.field, "$");
    }

    #[test]
    fn test_null_counts_as_missing() {
        let raw = json!({ "name": null });
        let fields = Fields::of(&raw).unwrap();
        assert_eq!(fields.optional_str("name"), Ok(None));
        assert_eq!(fields.required_str("name").unwrap_err().field, "name");
    }

    #[test]
    fn test_wrong_type_names_field() {
        let raw = json!({ "canLogin": "yes", "size": 1.5 });
        let fields = Fields::of(&raw).unwrap();
        assert_eq!(fields.required_bool("canLogin").unwrap_err().field, "canLogin");
        assert!(fields.required_i64("size").is_err());
    }

    #[test]
    fn test_bytes_reject_negative() {
        let raw = json!({ "file_size": -1, "quota": 0 });
        let fields = Fields::of(&raw).unwrap();
        let err = fields.required_bytes("file_size").unwrap_err();
        assert!(err.reason.contains("negative"));
        assert_eq!(fields.optional_bytes("quota"), Ok(Some(0)));
    }

    #[test]
    fn test_user_id_accepts_decimal_string() {
        let raw = json!({ "a": 12, "b": "34", "c": "x", "d": 0 });
        let fields = Fields::of(&raw).unwrap();
        assert_eq!(fields.required_user_id("a").map(UserId::get), Ok(12));
        assert_eq!(fields.required_user_id("b").map(UserId::get), Ok(34));
        assert!(fields.required_user_id("c").is_err());
        assert_eq!(fields.required_user_id("d").unwrap_err().field, "d");
    }

    #[test]
    fn test_timestamp_parsing() {
        let raw = json!({ "createdAt": "2024-01-01T02:00:00+02:00", "bad": "yesterday" });
        let fields = Fields::of(&raw).unwrap();
        let ts = fields.required_timestamp("createdAt").unwrap();
        assert_eq!(ts.as_str(), "2024-01-01T02:00:00+02:00");
        assert_eq!(ts.instant().to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(fields.optional_timestamp("bad").unwrap_err().field, "bad");
    }
}
