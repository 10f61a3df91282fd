//! Long-form chart tables.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use ntcna_common::any_to_f64;

use crate::Result;
use crate::data_utils::column_value_string;

/// Group label column; first half of the composite index.
pub const GROUP_COLUMN: &str = "group";
/// Scope display label column; second half of the composite index.
pub const SCOPE_COLUMN: &str = "scope";
pub const VALUE_COLUMN: &str = "value";

/// A reshaped chart table: one row per (group, scope) observation, in
/// template declaration order.
#[derive(Debug, Clone)]
pub struct ChartFrame {
    pub title: String,
    pub data: DataFrame,
}

impl ChartFrame {
    pub fn new(title: impl Into<String>, data: DataFrame) -> Self {
        Self {
            title: title.into(),
            data,
        }
    }

    pub fn row_count(&self) -> usize {
        self.data.height()
    }

    /// The (group, scope) index in row order.
    pub fn index(&self) -> Vec<(String, String)> {
        (0..self.data.height())
            .map(|idx| {
                (
                    column_value_string(&self.data, GROUP_COLUMN, idx),
                    column_value_string(&self.data, SCOPE_COLUMN, idx),
                )
            })
            .collect()
    }

    pub fn groups(&self) -> Vec<String> {
        first_seen(self.index().into_iter().map(|(group, _)| group))
    }

    pub fn scopes(&self) -> Vec<String> {
        first_seen(self.index().into_iter().map(|(_, scope)| scope))
    }

    /// The observation for one (group, scope) pair.
    pub fn value(&self, group: &str, scope: &str) -> Option<f64> {
        let values = self.data.column(VALUE_COLUMN).ok()?;
        self.index()
            .iter()
            .position(|(g, s)| g == group && s == scope)
            .and_then(|idx| values.get(idx).ok())
            .and_then(any_to_f64)
    }

    /// Pivots to one row per group with one column per scope label.
    ///
    /// An empty chart (a selection that matched no record) pivots to a
    /// zero-row table holding only the `group` column.
    pub fn to_wide(&self) -> Result<DataFrame> {
        let groups = self.groups();
        let scopes = self.scopes();
        let mut columns: Vec<Column> = Vec::with_capacity(scopes.len() + 1);
        columns.push(Series::new(GROUP_COLUMN.into(), groups.clone()).into_column());
        for scope in &scopes {
            let values: Vec<Option<f64>> = groups
                .iter()
                .map(|group| self.value(group, scope))
                .collect();
            columns.push(Series::new(scope.as_str().into(), values).into_column());
        }
        Ok(DataFrame::new(columns)?)
    }
}

fn first_seen<I: IntoIterator<Item = String>>(values: I) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
