//! Polars `AnyValue` conversions.
//!
//! Source tables come from GeoJSON properties and CSV cells, so the same
//! logical value can arrive as an integer, a float or a string. These helpers
//! give every caller one textual and one numeric view of a cell.

use polars::prelude::AnyValue;

/// Converts a cell to its display string.
///
/// `Null` becomes an empty string and floats lose trailing zeros, so a year
/// stored as `2011.0` and one stored as `"2011"` compare equal.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use ntcna_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(2011)), "2011");
/// assert_eq!(any_to_string(AnyValue::Float64(2011.0)), "2011");
/// assert_eq!(any_to_string(AnyValue::String("Santee")), "Santee");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Returns true for `Null` and for blank strings.
pub fn any_is_null(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::String(s) => s.trim().is_empty(),
        AnyValue::StringOwned(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Formats a float without trailing zeros.
///
/// ```
/// use ntcna_common::format_numeric;
///
/// assert_eq!(format_numeric(34.0), "34");
/// assert_eq!(format_numeric(12.50), "12.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Converts a cell to `f64`, parsing strings. Returns `None` for nulls and
/// non-numeric values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses a string as `i64`, returning `None` for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_render_the_same_across_dtypes() {
        assert_eq!(any_to_string(AnyValue::Int32(2015)), "2015");
        assert_eq!(any_to_string(AnyValue::Float64(2015.0)), "2015");
        assert_eq!(any_to_string(AnyValue::String("2015")), "2015");
    }

    #[test]
    fn format_numeric_keeps_integer_zeros() {
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(500.0), "500");
        assert_eq!(format_numeric(-2.50), "-2.5");
    }

    #[test]
    fn null_detection_covers_blank_strings() {
        assert!(any_is_null(&AnyValue::Null));
        assert!(any_is_null(&AnyValue::String("  ")));
        assert!(!any_is_null(&AnyValue::String("0")));
        assert!(!any_is_null(&AnyValue::Float64(0.0)));
    }

    #[test]
    fn any_to_f64_parses_strings() {
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_f64(AnyValue::Int64(38)), Some(38.0));
        assert_eq!(any_to_f64(AnyValue::String(" 36.5 ")), Some(36.5));
        assert_eq!(any_to_f64(AnyValue::String("n/a")), None);
    }

    #[test]
    fn parse_helpers_reject_blank() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_i64("  "), None);
        assert_eq!(parse_i64(" 43475 "), Some(43475));
    }
}
