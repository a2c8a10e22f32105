//! Core type definitions with validation.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The value is not a wall-clock time of day.
    #[error("invalid timestamp: {value:?} (expected HH:MM:SS)")]
    InvalidTimestamp { value: String },
}

/// A category label.
///
/// Categories are trimmed and uppercased on construction, so `"work"` and
/// `" Work "` name the same category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(pub(crate) String);

impl Category {
    /// Creates a new category after normalization and validation.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "category" });
        }
        Ok(Self(name.to_uppercase()))
    }

    /// Returns the category as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Category {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Category {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A wall-clock time of day with second precision.
///
/// Serialized as `HH:MM:SS`. Parsing also accepts `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntryTime(NaiveTime);

impl EntryTime {
    /// Builds a time from hour, minute, second.
    pub fn from_hms(hour: u32, min: u32, sec: u32) -> Result<Self, ValidationError> {
        NaiveTime::from_hms_opt(hour, min, sec)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidTimestamp {
                value: format!("{hour:02}:{min:02}:{sec:02}"),
            })
    }

    /// Parses `HH:MM:SS` or `HH:MM`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .map(Self::from)
            .map_err(|_| ValidationError::InvalidTimestamp {
                value: value.to_string(),
            })
    }

    /// Returns the underlying time.
    pub const fn time(self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for EntryTime {
    /// Drops sub-second precision.
    fn from(time: NaiveTime) -> Self {
        Self(time.with_nanosecond(0).unwrap_or(time))
    }
}

impl TryFrom<String> for EntryTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EntryTime> for String {
    fn from(time: EntryTime) -> Self {
        time.to_string()
    }
}

impl FromStr for EntryTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EntryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_uppercased_and_trimmed() {
        let category = Category::new("  work ").unwrap();
        assert_eq!(category.as_str(), "WORK");
        assert_eq!(category, "WORK");
    }

    #[test]
    fn category_rejects_empty() {
        assert_eq!(
            Category::new("   "),
            Err(ValidationError::Empty { field: "category" })
        );
    }

    #[test]
    fn category_deserialize_normalizes() {
        let category: Category = serde_json::from_str(r#""other""#).unwrap();
        assert_eq!(category, "OTHER");
    }

    #[test]
    fn category_deserialize_rejects_empty() {
        let result: Result<Category, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }

    #[test]
    fn entry_time_parses_full_and_short_forms() {
        assert_eq!(
            EntryTime::parse("09:30:15").unwrap(),
            EntryTime::from_hms(9, 30, 15).unwrap()
        );
        assert_eq!(
            EntryTime::parse("9:05").unwrap(),
            EntryTime::from_hms(9, 5, 0).unwrap()
        );
    }

    #[test]
    fn entry_time_rejects_garbage() {
        for bad in ["", "noon", "25:00:00", "12:61:00", "12-30-00"] {
            assert!(
                matches!(
                    EntryTime::parse(bad),
                    Err(ValidationError::InvalidTimestamp { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn entry_time_displays_padded() {
        let time = EntryTime::from_hms(7, 3, 9).unwrap();
        assert_eq!(time.to_string(), "07:03:09");
        assert_eq!(serde_json::to_string(&time).unwrap(), r#""07:03:09""#);
    }

    #[test]
    fn entry_time_truncates_subseconds() {
        let time = NaiveTime::from_hms_milli_opt(10, 0, 0, 750).unwrap();
        assert_eq!(EntryTime::from(time).to_string(), "10:00:00");
    }

    #[test]
    fn entry_time_orders_chronologically() {
        let early = EntryTime::parse("08:59:59").unwrap();
        let late = EntryTime::parse("09:00:00").unwrap();
        assert!(early < late);
    }
}
