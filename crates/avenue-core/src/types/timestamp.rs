//! RFC 3339 timestamps that keep the text they were read from.
//!
//! Producers send offsets other than `Z` and trim trailing zeros from the
//! fractional second. Re-rendering a parsed instant would change both, so
//! the original text travels with the parsed value and is what gets written
//! back out.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Seconds between `0001-01-01T00:00:00Z` and the Unix epoch.
const ZERO_INSTANT_UNIX: i64 = -62_135_596_800;

/// A point in time together with its wire spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp {
    instant: DateTime<FixedOffset>,
    text: String,
}

impl Timestamp {
    /// Parse an RFC 3339 string, keeping it verbatim.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        Self::try_from(text.to_string())
    }

    /// The current time in UTC.
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// The instant in UTC.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant.with_timezone(&Utc)
    }

    /// The instant in the offset it was written with.
    pub fn local(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    /// The wire spelling.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether this is `0001-01-01T00:00:00Z`, which some producers write
    /// in place of an absent time.
    pub fn is_zero(&self) -> bool {
        self.instant.timestamp() == ZERO_INSTANT_UNIX && self.instant.timestamp_subsec_nanos() == 0
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Self {
            text: instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            instant,
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::from(instant.fixed_offset())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Timestamp {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let instant = DateTime::parse_from_rfc3339(&value)
            .map_err(|e| ValidationError::new("$", format!("not an RFC 3339 timestamp: {e}")))?;
        Ok(Self {
            instant,
            text: value,
        })
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.text
    }
}
