//! Parsing of `--range` and `--category` filter arguments.

use anyhow::{Context, Result, bail};

use ntcna_common::parse_f64;
use ntcna_model::{FilterDecl, FilterValue};

/// A declared filter plus the value to apply, if one was given.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterArg {
    pub decl: FilterDecl,
    pub value: Option<FilterValue>,
}

fn split_spec(spec: &str) -> (&str, Option<&str>) {
    match spec.split_once('=') {
        Some((column, value)) => (column.trim(), Some(value.trim())),
        None => (spec.trim(), None),
    }
}

/// Parses `COLUMN` or `COLUMN=LO:HI`. Either bound may be left out and then
/// stays at the column's extent, so `COLUMN=100:` keeps everything from 100.
pub fn parse_range_arg(spec: &str) -> Result<FilterArg> {
    let (column, raw) = split_spec(spec);
    let decl = FilterDecl::range(column).with_context(|| format!("range filter '{spec}'"))?;
    let value = match raw {
        None => None,
        Some(raw) => {
            let Some((lo, hi)) = raw.split_once(':') else {
                bail!("range filter '{spec}' must look like COLUMN=LO:HI");
            };
            Some(FilterValue::range(
                parse_bound(lo, f64::NEG_INFINITY, spec)?,
                parse_bound(hi, f64::INFINITY, spec)?,
            ))
        }
    };
    Ok(FilterArg { decl, value })
}

fn parse_bound(raw: &str, open: f64, spec: &str) -> Result<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(open);
    }
    parse_f64(raw).with_context(|| format!("range filter '{spec}': '{raw}' is not a number"))
}

/// Parses `COLUMN` or `COLUMN=A,B,..`. `COLUMN=` selects nothing.
pub fn parse_category_arg(spec: &str) -> Result<FilterArg> {
    let (column, raw) = split_spec(spec);
    let decl =
        FilterDecl::category(column).with_context(|| format!("category filter '{spec}'"))?;
    let value = raw.map(|raw| {
        FilterValue::categories(
            raw.split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty()),
        )
    });
    Ok(FilterArg { decl, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_bounds_use_infinity() {
        let arg = parse_range_arg("orbit_number=100:").unwrap();
        assert_eq!(arg.value, Some(FilterValue::range(100.0, f64::INFINITY)));
    }

    #[test]
    fn empty_category_list_selects_nothing() {
        let arg = parse_category_arg("station_id=").unwrap();
        assert!(arg.value.unwrap().is_empty());
    }
}
