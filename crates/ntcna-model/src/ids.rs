#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// First census year the dashboard supports.
pub const MIN_YEAR: u16 = 2011;
/// Last census year the dashboard supports.
pub const MAX_YEAR: u16 = 2020;

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PlaceCode(String);

impl PlaceCode {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(ModelError::InvalidCode {
                kind: "place",
                value,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct DemographicCode(String);

impl DemographicCode {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
            return Err(ModelError::InvalidCode {
                kind: "demographic",
                value,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DemographicCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A census year within [`MIN_YEAR`]..=[`MAX_YEAR`].
///
/// Source tables store the year as text, so comparisons go through
/// [`Year::as_key`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Year(u16);

impl Year {
    pub fn new(year: i64) -> Result<Self, ModelError> {
        if year < i64::from(MIN_YEAR) || year > i64::from(MAX_YEAR) {
            return Err(ModelError::YearOutOfBounds {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }
        Ok(Self(year as u16))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// The textual form used by the `year` column.
    pub fn as_key(self) -> String {
        self.0.to_string()
    }
}

impl Default for Year {
    fn default() -> Self {
        Self(MIN_YEAR)
    }
}

impl TryFrom<i64> for Year {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i64 {
    fn from(year: Year) -> Self {
        i64::from(year.0)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
