//! Shared utilities for the NTCNA dashboard crates.
//!
//! Cell-level conversions between polars `AnyValue`s and the plain strings and
//! numbers the reshape and filter cores compare against.

pub mod columns;
pub mod polars;

pub use columns::{CENTROID_X_COLUMN, CENTROID_Y_COLUMN};
pub use polars::{any_is_null, any_to_f64, any_to_string, format_numeric, parse_f64, parse_i64};
