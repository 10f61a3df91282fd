//! Filter declarations and values for the dataframe filter engine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{ModelError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    /// Two-sided inclusive numeric bound.
    Range,
    /// Multi-select over the distinct observed values.
    Category,
}

/// A column the user may filter on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterDecl {
    pub column: String,
    pub kind: FilterKind,
}

impl FilterDecl {
    pub fn new(column: impl Into<String>, kind: FilterKind) -> Result<Self> {
        let column = column.into();
        if column.trim().is_empty() {
            return Err(ModelError::InvalidFilter(
                "filter column name is empty".to_string(),
            ));
        }
        Ok(Self { column, kind })
    }

    pub fn range(column: impl Into<String>) -> Result<Self> {
        Self::new(column, FilterKind::Range)
    }

    pub fn category(column: impl Into<String>) -> Result<Self> {
        Self::new(column, FilterKind::Category)
    }
}

/// A filter's current value, or a computed extent of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    /// Inclusive bounds. Integer columns are compared as `f64`, which is exact
    /// up to 2^53.
    Range { start: f64, end: f64 },
    Categories(BTreeSet<String>),
}

impl FilterValue {
    pub fn range(start: f64, end: f64) -> Self {
        FilterValue::Range { start, end }
    }

    pub fn categories<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::Categories(values.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            FilterValue::Range { .. } => FilterKind::Range,
            FilterValue::Categories(_) => FilterKind::Category,
        }
    }

    /// A range with `start > end` matches nothing; so does an empty set.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Range { start, end } => start > end,
            FilterValue::Categories(values) => values.is_empty(),
        }
    }

    pub fn contains_number(&self, value: f64) -> bool {
        match self {
            FilterValue::Range { start, end } => *start <= value && value <= *end,
            FilterValue::Categories(_) => false,
        }
    }

    pub fn contains_category(&self, value: &str) -> bool {
        match self {
            FilterValue::Range { .. } => false,
            FilterValue::Categories(values) => values.contains(value),
        }
    }

    /// True when `self` admits no value outside `outer`.
    pub fn is_within(&self, outer: &FilterValue) -> bool {
        match (self, outer) {
            (FilterValue::Range { start, end }, FilterValue::Range { start: lo, end: hi }) => {
                start > end || (lo <= start && end <= hi)
            }
            (FilterValue::Categories(inner), FilterValue::Categories(outer)) => {
                inner.is_subset(outer)
            }
            _ => false,
        }
    }

    /// Narrows `self` to what `outer` admits: ranges are intersected (a
    /// disjoint pair gives a degenerate range), category sets likewise.
    /// Values of a different kind come back unchanged.
    pub fn clamp_to(&self, outer: &FilterValue) -> FilterValue {
        match (self, outer) {
            (FilterValue::Range { start, end }, FilterValue::Range { start: lo, end: hi }) => {
                FilterValue::range((*start).max(*lo), (*end).min(*hi))
            }
            (FilterValue::Categories(inner), FilterValue::Categories(outer)) => {
                FilterValue::Categories(inner.intersection(outer).cloned().collect())
            }
            _ => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_range_is_empty() {
        assert!(FilterValue::range(5.0, 1.0).is_empty());
        assert!(!FilterValue::range(1.0, 1.0).is_empty());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let value = FilterValue::range(100.0, 200.0);
        assert!(value.contains_number(100.0));
        assert!(value.contains_number(200.0));
        assert!(!value.contains_number(200.5));
    }

    #[test]
    fn subset_checks() {
        let full = FilterValue::range(1.0, 500.0);
        assert!(FilterValue::range(100.0, 200.0).is_within(&full));
        assert!(!FilterValue::range(0.0, 200.0).is_within(&full));
        let all = FilterValue::categories(["a", "b", "c"]);
        assert!(FilterValue::categories(["a"]).is_within(&all));
        assert!(!FilterValue::categories(["z"]).is_within(&all));
    }

    #[test]
    fn clamping_stays_within_outer() {
        let full = FilterValue::range(1.0, 500.0);
        assert_eq!(
            FilterValue::range(0.0, 200.0).clamp_to(&full),
            FilterValue::range(1.0, 200.0)
        );
        let disjoint = FilterValue::range(600.0, 700.0).clamp_to(&full);
        assert!(disjoint.is_empty());
        assert!(disjoint.is_within(&full));
        let all = FilterValue::categories(["a", "b"]);
        assert_eq!(
            FilterValue::categories(["b", "z"]).clamp_to(&all),
            FilterValue::categories(["b"])
        );
    }

    #[test]
    fn empty_column_name_is_rejected() {
        assert!(FilterDecl::range("  ").is_err());
    }
}
