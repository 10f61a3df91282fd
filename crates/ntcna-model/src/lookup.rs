//! Static name/code tables for places and demographic groups.

use crate::{ModelError, Result};

const PLACES: &[(&str, &str)] = &[
    ("Santee", "43475"),
    ("Rosalie", "42250"),
    ("Macy", "30170"),
    ("Walthill", "51245"),
    ("Winnebego", "53275"),
    ("Pender", "38750"),
    ("Thurston", "48900"),
];

const DEMOGRAPHICS: &[(&str, &str)] = &[
    ("Total Population", "total"),
    ("Native American", "nat"),
    ("White", "white"),
    ("Black", "black"),
    ("Asian", "asian"),
    ("Hispanic", "hispanic"),
    ("Other", "other"),
    ("Two or More", "mult"),
    ("Pacific Islander", "pacisl"),
];

/// An ordered table of (human-readable name, code) pairs.
///
/// Iteration order is declaration order; reverse lookups return the first
/// entry whose code matches.
#[derive(Debug, Clone)]
pub struct CodeTable {
    label: &'static str,
    entries: Vec<(String, String)>,
}

impl CodeTable {
    pub fn new<I, N, C>(label: &'static str, entries: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            label,
            entries: entries
                .into_iter()
                .map(|(name, code)| (name.into(), code.into()))
                .collect(),
        }
    }

    pub fn places() -> Self {
        Self::new("place", PLACES.iter().copied())
    }

    pub fn demographics() -> Self {
        Self::new("demographic", DEMOGRAPHICS.iter().copied())
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, code)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, code)| (name.as_str(), code.as_str()))
    }

    pub fn name_for_code(&self, code: &str) -> Result<&str> {
        self.entries
            .iter()
            .find(|(_, value)| value == code)
            .map(|(name, _)| name.as_str())
            .ok_or_else(|| ModelError::UnknownCode {
                table: self.label,
                code: code.to_string(),
            })
    }

    pub fn code_for_name(&self, name: &str) -> Result<&str> {
        let trimmed = name.trim();
        self.entries
            .iter()
            .find(|(key, _)| key == trimmed)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(trimmed))
            })
            .map(|(_, code)| code.as_str())
            .ok_or_else(|| ModelError::UnknownName {
                table: self.label,
                name: name.to_string(),
            })
    }

    /// Accepts either a code or a name and returns the code.
    pub fn resolve(&self, code_or_name: &str) -> Result<&str> {
        let trimmed = code_or_name.trim();
        if let Some((_, code)) = self.entries.iter().find(|(_, code)| code == trimmed) {
            return Ok(code.as_str());
        }
        self.code_for_name(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_lookup_takes_first_match() {
        let table = CodeTable::new("place", [("First", "1"), ("Second", "1")]);
        assert_eq!(table.name_for_code("1").unwrap(), "First");
    }

    #[test]
    fn resolve_accepts_names_and_codes() {
        let places = CodeTable::places();
        assert_eq!(places.resolve("42250").unwrap(), "42250");
        assert_eq!(places.resolve("rosalie").unwrap(), "42250");
        assert!(places.resolve("Omaha").is_err());
    }

    #[test]
    fn unknown_code_names_the_table() {
        let err = CodeTable::demographics().name_for_code("martian").unwrap_err();
        assert_eq!(err.to_string(), "no demographic entry has code 'martian'");
    }
}
