use std::collections::BTreeSet;

use polars::prelude::Column;

use ntcna_common::{any_is_null, any_to_f64, any_to_string};
use ntcna_model::{FilterKind, FilterValue};

use crate::Result;

/// Min/max (range) or distinct values (category) of a column, ignoring nulls.
///
/// Returns `None` for a range over a column without numeric values. Range
/// extents are `f64`, exact for integers up to 2^53 in magnitude.
pub fn column_extent(column: &Column, kind: FilterKind) -> Result<Option<FilterValue>> {
    match kind {
        FilterKind::Range => {
            let mut bounds: Option<(f64, f64)> = None;
            for idx in 0..column.len() {
                let Some(value) = any_to_f64(column.get(idx)?) else {
                    continue;
                };
                if value.is_nan() {
                    continue;
                }
                bounds = Some(match bounds {
                    Some((lo, hi)) => (lo.min(value), hi.max(value)),
                    None => (value, value),
                });
            }
            Ok(bounds.map(|(start, end)| FilterValue::range(start, end)))
        }
        FilterKind::Category => {
            let mut values = BTreeSet::new();
            for idx in 0..column.len() {
                let value = column.get(idx)?;
                if any_is_null(&value) {
                    continue;
                }
                values.insert(any_to_string(value));
            }
            Ok(Some(FilterValue::Categories(values)))
        }
    }
}
