//! Terminal tables for command output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::DataFrame;

use ntcna_common::format_numeric;
use ntcna_model::{CodeTable, FilterKind, FilterValue, Year};
use ntcna_transform::{ChartFrame, FilterState, MapFocus, column_value_string};

/// Categories listed before the rest are summarised as a count.
const MAX_LISTED_CATEGORIES: usize = 6;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn code_table(codes: &CodeTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Name"), header_cell("Code")]);
    apply_table_style(&mut table);
    for (name, code) in codes.iter() {
        table.add_row(vec![Cell::new(name), Cell::new(code)]);
    }
    table
}

pub fn years_table(years: &[Year]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Year")]);
    apply_table_style(&mut table);
    for year in years {
        table.add_row(vec![Cell::new(year)]);
    }
    table
}

/// One row per (group, scope) observation.
pub fn chart_table(frame: &ChartFrame) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Scope"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (group, scope) in frame.index() {
        let value = value_cell(frame.value(&group, &scope));
        table.add_row(vec![Cell::new(group), Cell::new(scope), value]);
    }
    table
}

/// One row per group, one column per scope label.
pub fn wide_chart_table(frame: &ChartFrame) -> Table {
    let scopes = frame.scopes();
    let mut table = Table::new();
    let mut header = vec![header_cell("Group")];
    header.extend(scopes.iter().map(|scope| header_cell(scope)));
    table.set_header(header);
    apply_table_style(&mut table);
    for idx in 1..=scopes.len() {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for group in frame.groups() {
        let mut row = vec![Cell::new(&group)];
        row.extend(
            scopes
                .iter()
                .map(|scope| value_cell(frame.value(&group, scope))),
        );
        table.add_row(row);
    }
    table
}

pub fn map_table(focus: &MapFocus) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(&focus.title), header_cell("")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Longitude"), Cell::new(focus.longitude)]);
    table.add_row(vec![Cell::new("Latitude"), Cell::new(focus.latitude)]);
    table.add_row(vec![Cell::new("Zoom"), Cell::new(focus.zoom)]);
    table.add_row(vec![
        Cell::new("Features"),
        Cell::new(focus.features.height()),
    ]);
    table
}

pub fn filter_table(filters: &[FilterState]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Full extent"),
        header_cell("Subset"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    for state in filters {
        let kind = match state.kind() {
            FilterKind::Range => "range",
            FilterKind::Category => "category",
        };
        let value = describe_value(state.value());
        let value = if state.is_user_set() {
            Cell::new(value).add_attribute(Attribute::Bold)
        } else {
            Cell::new(value)
        };
        table.add_row(vec![
            Cell::new(state.column()),
            Cell::new(kind),
            Cell::new(describe_value(state.full_extent())),
            Cell::new(describe_value(state.subset_bounds())),
            value,
        ]);
    }
    table
}

/// The first `limit` rows of `df`, every column rendered as text.
pub fn rows_table(df: &DataFrame, limit: usize) -> Table {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut table = Table::new();
    table.set_header(names.iter().map(|name| header_cell(name)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for idx in 0..df.height().min(limit) {
        table.add_row(
            names
                .iter()
                .map(|name| Cell::new(column_value_string(df, name, idx)))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// Renders a filter value: `lo..=hi` for ranges, a comma list for categories.
pub fn describe_value(value: Option<&FilterValue>) -> String {
    match value {
        None => "-".to_string(),
        Some(FilterValue::Range { start, end }) => {
            format!("{}..={}", format_numeric(*start), format_numeric(*end))
        }
        Some(FilterValue::Categories(values)) if values.is_empty() => "(none)".to_string(),
        Some(FilterValue::Categories(values)) => {
            let listed: Vec<&str> = values
                .iter()
                .take(MAX_LISTED_CATEGORIES)
                .map(String::as_str)
                .collect();
            let rest = values.len().saturating_sub(MAX_LISTED_CATEGORIES);
            if rest == 0 {
                listed.join(", ")
            } else {
                format!("{} (+{rest} more)", listed.join(", "))
            }
        }
    }
}

fn value_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format_numeric(value)),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
