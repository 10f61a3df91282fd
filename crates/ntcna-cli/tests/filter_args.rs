//! Integration tests for filter argument parsing.

use ntcna_cli::filter_args::{parse_category_arg, parse_range_arg};
use ntcna_model::{FilterKind, FilterValue};

#[test]
fn bare_column_declares_without_value() {
    let arg = parse_range_arg("orbit_number").unwrap();
    assert_eq!(arg.decl.column, "orbit_number");
    assert_eq!(arg.decl.kind, FilterKind::Range);
    assert_eq!(arg.value, None);
}

#[test]
fn range_with_both_bounds() {
    let arg = parse_range_arg("orbit_number=100:200").unwrap();
    assert_eq!(arg.value, Some(FilterValue::range(100.0, 200.0)));
}

#[test]
fn range_keeps_degenerate_bounds() {
    let arg = parse_range_arg("orbit_number=300:200").unwrap();
    assert!(arg.value.unwrap().is_empty());
}

#[test]
fn malformed_ranges_are_rejected() {
    assert!(parse_range_arg("orbit_number=100").is_err());
    assert!(parse_range_arg("orbit_number=abc:200").is_err());
    assert!(parse_range_arg("=1:2").is_err());
}

#[test]
fn categories_split_on_commas() {
    let arg = parse_category_arg("station_id = A, B ,C").unwrap();
    assert_eq!(arg.decl.column, "station_id");
    assert_eq!(arg.decl.kind, FilterKind::Category);
    assert_eq!(arg.value, Some(FilterValue::categories(["A", "B", "C"])));
}
