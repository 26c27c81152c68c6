//! Common types used throughout Solidafy Paginate
//!
//! This module contains shared type definitions, type aliases,
//! and the `PageNumber` value type.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Nested request/URL parameter map (string keys, JSON values)
pub type ParamMap = serde_json::Map<String, JsonValue>;

// ============================================================================
// Page Number
// ============================================================================

/// A 1-based page number
///
/// Always `>= 1`. Compares equal to raw integers so it can be matched
/// against plain numbers coming from templates or requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PageNumber(u64);

impl PageNumber {
    /// The first page
    pub const FIRST: PageNumber = PageNumber(1);

    /// Create a page number, rejecting values below 1
    pub fn new(value: u64) -> Result<Self> {
        if value < 1 {
            return Err(Error::invalid_argument(
                "page",
                format!("page number must be >= 1, got {value}"),
            ));
        }
        Ok(Self(value))
    }

    /// Parse a page number from a string such as `"2"` or `" 3 "`
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let number = trimmed.parse::<i64>().map_err(|_| {
            Error::invalid_argument("page", format!("'{trimmed}' is not a valid page number"))
        })?;
        Self::from_signed(number)
    }

    /// Parse a page number from a JSON value (number or numeric string)
    pub fn from_value(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Number(n) => match (n.as_u64(), n.as_i64()) {
                (Some(v), _) => Self::new(v),
                (None, Some(v)) => Self::from_signed(v),
                _ => Err(Error::invalid_argument(
                    "page",
                    format!("'{n}' is not a valid page number"),
                )),
            },
            JsonValue::String(s) => Self::parse(s),
            other => Err(Error::invalid_argument(
                "page",
                format!("expected a number, got {other}"),
            )),
        }
    }

    fn from_signed(value: i64) -> Result<Self> {
        let value = u64::try_from(value).map_err(|_| {
            Error::invalid_argument("page", format!("page number must be >= 1, got {value}"))
        })?;
        Self::new(value)
    }

    /// The raw page number
    pub fn get(self) -> u64 {
        self.0
    }

    /// The page before this one, if any
    pub fn previous(self) -> Option<PageNumber> {
        (self.0 > 1).then(|| PageNumber(self.0 - 1))
    }

    /// The page after this one
    pub fn next(self) -> PageNumber {
        PageNumber(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for PageNumber {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for PageNumber {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

impl From<PageNumber> for u64 {
    fn from(page: PageNumber) -> Self {
        page.0
    }
}

impl From<PageNumber> for JsonValue {
    fn from(page: PageNumber) -> Self {
        JsonValue::from(page.0)
    }
}

impl PartialEq<u64> for PageNumber {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<PageNumber> for u64 {
    fn eq(&self, other: &PageNumber) -> bool {
        *self == other.0
    }
}

impl PartialEq<i32> for PageNumber {
    fn eq(&self, other: &i32) -> bool {
        u64::try_from(*other).is_ok_and(|other| other == self.0)
    }
}

impl PartialEq<PageNumber> for i32 {
    fn eq(&self, other: &PageNumber) -> bool {
        other == self
    }
}

/// Parse a positive per-page value from a JSON value (number or numeric string)
pub fn parse_per_page(value: &JsonValue) -> Result<u64> {
    let parsed = match value {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v > 0 => Ok(v as u64),
        _ => Err(Error::invalid_argument(
            "per_page",
            format!("per_page must be a positive integer, got {value}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_number_rejects_zero() {
        assert!(PageNumber::new(0).unwrap_err().is_invalid_argument());
        assert_eq!(PageNumber::new(1).unwrap(), 1u64);
    }

    #[test]
    fn test_page_number_parse() {
        assert_eq!(PageNumber::parse("2").unwrap(), 2);
        assert_eq!(PageNumber::parse(" 7 ").unwrap(), 7);
        assert!(PageNumber::parse("-1").is_err());
        assert!(PageNumber::parse("two").is_err());
        assert!(PageNumber::parse("").is_err());
    }

    #[test]
    fn test_page_number_from_value() {
        assert_eq!(PageNumber::from_value(&json!(3)).unwrap(), 3);
        assert_eq!(PageNumber::from_value(&json!("4")).unwrap(), 4);
        assert!(PageNumber::from_value(&json!(-2)).is_err());
        assert!(PageNumber::from_value(&json!(1.5)).is_err());
        assert!(PageNumber::from_value(&json!(null)).is_err());
    }

    #[test]
    fn test_page_number_compares_with_integers() {
        let page = PageNumber::new(5).unwrap();
        assert_eq!(page, 5u64);
        assert_eq!(5u64, page);
        assert_eq!(page, 5);
        assert_ne!(page, 4);

        let huge = PageNumber::new(u64::MAX).unwrap();
        assert_ne!(huge, -1);
        assert_ne!(PageNumber::new(i64::MAX as u64 + 1).unwrap(), 0);
    }

    #[test]
    fn test_page_number_neighbours() {
        assert_eq!(PageNumber::FIRST.previous(), None);
        assert_eq!(PageNumber::new(2).unwrap().previous(), Some(PageNumber::FIRST));
        assert_eq!(PageNumber::FIRST.next(), 2);
    }

    #[test]
    fn test_page_number_serde() {
        let page: PageNumber = serde_json::from_value(json!("12")).unwrap();
        assert_eq!(page, 12);
        assert_eq!(serde_json::to_value(page).unwrap(), json!(12));
        assert!(serde_json::from_value::<PageNumber>(json!(0)).is_err());
    }

    #[test]
    fn test_parse_per_page() {
        assert_eq!(parse_per_page(&json!(10)).unwrap(), 10);
        assert_eq!(parse_per_page(&json!("3")).unwrap(), 3);
        assert!(parse_per_page(&json!(0)).is_err());
        assert!(parse_per_page(&json!("abc")).is_err());
    }
}
