//! DataFrame value extraction helpers.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use ntcna_common::{any_to_string, parse_i64};
use ntcna_model::Year;

use crate::{Result, TransformError};

/// Get a string value from a DataFrame column at the given row index.
pub fn column_value_string(df: &DataFrame, name: &str, idx: usize) -> String {
    match df.column(name) {
        Ok(column) => any_to_string(column.get(idx).unwrap_or(AnyValue::Null)),
        Err(_) => String::new(),
    }
}

/// Fails with [`TransformError::MissingColumn`] for the first absent column.
pub fn require_columns<'a, I>(df: &DataFrame, columns: I, context: &str) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for column in columns {
        if df.column(column).is_err() {
            return Err(TransformError::MissingColumn {
                column: column.to_string(),
                context: context.to_string(),
            });
        }
    }
    Ok(())
}

/// Sorted distinct years present in `year_column`, ignoring blanks and years
/// outside the supported range.
pub fn available_years(df: &DataFrame, year_column: &str) -> Result<Vec<Year>> {
    require_columns(df, [year_column], "available years")?;
    let mut years = BTreeSet::new();
    for idx in 0..df.height() {
        let raw = column_value_string(df, year_column, idx);
        let Some(value) = parse_i64(&raw) else {
            continue;
        };
        match Year::new(value) {
            Ok(year) => {
                years.insert(year);
            }
            Err(error) => debug!(%error, "skipping year"),
        }
    }
    Ok(years.into_iter().collect())
}
