//! Column selection, row filtering and unpivoting for reshapes.

use polars::prelude::{
    Column, DataFrame, DataType, IntoColumn, IntoLazy, NamedFrom, Series, col, lit,
};

use ntcna_common::any_to_f64;
use ntcna_model::DashboardConfig;

use super::ResolvedColumn;
use crate::Result;
use crate::frame::{GROUP_COLUMN, SCOPE_COLUMN, VALUE_COLUMN};

/// Identity columns present in `source` plus every resolved source column,
/// each once, in declaration order.
pub(super) fn select_columns(
    source: &DataFrame,
    config: &DashboardConfig,
    resolved: &[ResolvedColumn],
) -> Result<DataFrame> {
    let mut names: Vec<&str> = Vec::new();
    let identity = config
        .identity_columns()
        .into_iter()
        .filter(|name| source.column(name).is_ok());
    for name in identity.chain(resolved.iter().map(|c| c.source.as_str())) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    Ok(source.select(names)?)
}

/// Rows whose place identifier and year match, compared as text.
pub(super) fn select_record_rows(
    df: DataFrame,
    config: &DashboardConfig,
    place_id: &str,
    year_key: &str,
) -> Result<DataFrame> {
    let place_matches = col(config.place_id_column.as_str())
        .cast(DataType::String)
        .eq(lit(place_id.to_string()));
    let year_matches = col(config.year_column.as_str())
        .cast(DataType::String)
        .eq(lit(year_key.to_string()));
    Ok(df
        .lazy()
        .filter(place_matches.and(year_matches))
        .collect()?)
}

/// Emits one (group, scope, value) row per resolved column per record.
pub(super) fn unpivot(records: &DataFrame, resolved: &[ResolvedColumn]) -> Result<DataFrame> {
    let capacity = records.height() * resolved.len();
    let mut groups: Vec<String> = Vec::with_capacity(capacity);
    let mut scopes: Vec<String> = Vec::with_capacity(capacity);
    let mut values: Vec<Option<f64>> = Vec::with_capacity(capacity);
    for idx in 0..records.height() {
        for column in resolved {
            let value = records.column(&column.source)?.get(idx)?;
            groups.push(column.group.clone());
            scopes.push(column.label.clone());
            values.push(any_to_f64(value));
        }
    }
    let columns: Vec<Column> = vec![
        Series::new(GROUP_COLUMN.into(), groups).into_column(),
        Series::new(SCOPE_COLUMN.into(), scopes).into_column(),
        Series::new(VALUE_COLUMN.into(), values).into_column(),
    ];
    Ok(DataFrame::new(columns)?)
}
