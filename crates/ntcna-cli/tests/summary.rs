//! Integration tests for terminal table rendering.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use ntcna_cli::summary::{chart_table, code_table, describe_value, rows_table, wide_chart_table};
use ntcna_model::{CodeTable, FilterValue};
use ntcna_transform::ChartFrame;

fn chart() -> ChartFrame {
    let data = DataFrame::new(vec![
        Series::new("group".into(), vec!["Under 18", "Under 18", "Under 18"]).into_column(),
        Series::new("scope".into(), vec!["US", "Nebraska", "Santee"]).into_column(),
        Series::new("value".into(), vec![Some(21.0), Some(15.5), None]).into_column(),
    ])
    .unwrap();
    ChartFrame::new("Poverty Rate", data)
}

#[test]
fn filter_values_render_compactly() {
    let rendered = [
        describe_value(None),
        describe_value(Some(&FilterValue::range(1.0, 500.0))),
        describe_value(Some(&FilterValue::range(0.25, 12.5))),
        describe_value(Some(&FilterValue::categories(Vec::<String>::new()))),
        describe_value(Some(&FilterValue::categories(["B", "A"]))),
        describe_value(Some(&FilterValue::categories([
            "a", "b", "c", "d", "e", "f", "g", "h",
        ]))),
    ]
    .join("\n");
    insta::assert_snapshot!(rendered, @r"
    -
    1..=500
    0.25..=12.5
    (none)
    A, B
    a, b, c, d, e, f (+2 more)
    ");
}

#[test]
fn chart_table_lists_every_observation() {
    let mut table = chart_table(&chart());
    table.force_no_tty();
    let rendered = table.to_string();
    assert!(rendered.contains("Nebraska"));
    assert!(rendered.contains("15.5"));
    assert!(rendered.contains("Santee"));
    assert_eq!(table.row_iter().count(), 3);
}

#[test]
fn wide_chart_table_has_a_column_per_scope() {
    let mut table = wide_chart_table(&chart());
    table.force_no_tty();
    assert_eq!(table.column_count(), 4);
    assert_eq!(table.row_iter().count(), 1);
}

#[test]
fn code_table_keeps_declaration_order() {
    let mut table = code_table(&CodeTable::places());
    table.force_no_tty();
    let rendered = table.to_string();
    let santee = rendered.find("Santee").unwrap();
    let thurston = rendered.find("Thurston").unwrap();
    assert!(santee < thurston);
    assert_eq!(table.row_iter().count(), 7);
}

#[test]
fn rows_table_respects_limit() {
    let df = DataFrame::new(vec![
        Series::new("orbit_number".into(), vec![1i64, 2, 3, 4]).into_column(),
    ])
    .unwrap();
    assert_eq!(rows_table(&df, 2).row_iter().count(), 2);
    assert_eq!(rows_table(&df, 10).row_iter().count(), 4);
}
