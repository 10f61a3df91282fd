//! Column-wise DataFrame construction with type inference.
//!
//! GeoJSON properties and CSV cells are collected as [`Cell`]s; when the frame
//! is built each column becomes `Int64`, `Float64` or `String` depending on
//! what it holds. Columns named in [`IngestOptions::text_columns`] always stay
//! text so codes such as place identifiers keep their exact spelling.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use ntcna_common::{format_numeric, parse_f64};
use ntcna_model::DashboardConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Classifies a raw CSV cell: blank is null, numeric text is a number.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('\u{feff}');
        if trimmed.is_empty() {
            return Cell::Null;
        }
        match parse_f64(trimmed) {
            Some(value) => Cell::Number(value),
            None => Cell::Text(trimmed.to_string()),
        }
    }

    fn into_text(self) -> Option<String> {
        match self {
            Cell::Null => None,
            Cell::Number(value) => Some(format_numeric(value)),
            Cell::Text(text) => Some(text),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    /// Columns that are never converted to numbers.
    pub text_columns: BTreeSet<String>,
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the configured identity columns as text.
    pub fn for_config(config: &DashboardConfig) -> Self {
        Self {
            text_columns: config
                .identity_columns()
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        }
    }

    #[must_use]
    pub fn with_text_column(mut self, name: impl Into<String>) -> Self {
        self.text_columns.insert(name.into());
        self
    }
}

/// Accumulates rows of cells under a growing header list.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    headers: Vec<String>,
    columns: Vec<Vec<Cell>>,
    rows: usize,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = Self::new();
        for header in headers {
            builder.column_index(&header.into());
        }
        builder
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    fn column_index(&mut self, name: &str) -> usize {
        if let Some(idx) = self.headers.iter().position(|h| h == name) {
            return idx;
        }
        self.headers.push(name.to_string());
        self.columns.push(vec![Cell::Null; self.rows]);
        self.headers.len() - 1
    }

    /// Appends a row. Columns absent from `cells` are null for this row;
    /// unseen column names are added and back-filled with nulls.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (S, Cell)>,
        S: AsRef<str>,
    {
        for (name, cell) in cells {
            let idx = self.column_index(name.as_ref());
            let column = &mut self.columns[idx];
            if column.len() > self.rows {
                // Duplicate key within a row: last value wins.
                column.pop();
            }
            column.push(cell);
        }
        self.rows += 1;
        for column in &mut self.columns {
            if column.len() < self.rows {
                column.push(Cell::Null);
            }
        }
    }

    pub fn build(self, options: &IngestOptions) -> Result<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.headers.len());
        for (name, cells) in self.headers.into_iter().zip(self.columns) {
            let column = if options.text_columns.contains(&name) {
                text_column(&name, cells)
            } else {
                infer_column(&name, cells)
            };
            columns.push(column);
        }
        DataFrame::new(columns).context("build dataframe from cells")
    }
}

fn infer_column(name: &str, cells: Vec<Cell>) -> Column {
    let mut any_value = false;
    let mut all_numeric = true;
    let mut all_integral = true;
    for cell in &cells {
        match cell {
            Cell::Null => {}
            Cell::Number(value) => {
                any_value = true;
                if value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
                    all_integral = false;
                }
            }
            Cell::Text(_) => {
                any_value = true;
                all_numeric = false;
            }
        }
    }
    if !any_value || !all_numeric {
        return text_column(name, cells);
    }
    if all_integral {
        let values: Vec<Option<i64>> = cells
            .into_iter()
            .map(|cell| match cell {
                Cell::Number(value) => Some(value as i64),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), values).into_column();
    }
    let values: Vec<Option<f64>> = cells
        .into_iter()
        .map(|cell| match cell {
            Cell::Number(value) => Some(value),
            _ => None,
        })
        .collect();
    Series::new(name.into(), values).into_column()
}

fn text_column(name: &str, cells: Vec<Cell>) -> Column {
    let values: Vec<Option<String>> = cells.into_iter().map(Cell::into_text).collect();
    Series::new(name.into(), values).into_column()
}
