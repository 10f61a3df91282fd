//! Selection pipeline: wide census records to long chart tables.
//!
//! A [`ChartTemplate`] names, for every (group, scope) cell of a chart, the
//! source column that holds it. Reshaping resolves those names for the current
//! selection, picks the one record for the selected place and year, and
//! unpivots the resolved columns into (group, scope, value) rows.

mod utils;

use polars::prelude::DataFrame;
use tracing::{debug, info_span, warn};

use ntcna_model::{ChartKind, ChartTemplate, CodeTable, DashboardConfig, Scope, Selection};

use crate::data_utils::require_columns;
use crate::frame::ChartFrame;
use crate::Result;

use self::utils::{select_columns, select_record_rows, unpivot};

/// Lookup tables and naming configuration a reshape needs besides the data.
#[derive(Debug, Clone, Copy)]
pub struct ReshapeContext<'a> {
    pub places: &'a CodeTable,
    pub demographics: &'a CodeTable,
    pub config: &'a DashboardConfig,
}

/// A template column after substituting the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// Column name in the source table.
    pub source: String,
    /// Display label of the scope ("US", the state, the place name).
    pub label: String,
    pub scope: Scope,
    pub group: String,
}

/// Resolves every template column to its source name and display label.
///
/// Display labels repeat across groups; rows are told apart by group.
pub fn resolve_columns(
    selection: &Selection,
    template: &ChartTemplate,
    ctx: &ReshapeContext<'_>,
) -> Result<Vec<ResolvedColumn>> {
    let place_name = ctx.places.name_for_code(selection.place.as_str())?;
    let demographic_name = ctx
        .demographics
        .name_for_code(selection.demographic.as_str())?;
    debug!(place = place_name, demographic = demographic_name, "resolved selection labels");

    Ok(template
        .columns()
        .iter()
        .map(|column| ResolvedColumn {
            source: column.render(&selection.demographic),
            label: match column.scope {
                Scope::National => "US".to_string(),
                Scope::State => ctx.config.state_label.clone(),
                Scope::Place => place_name.to_string(),
            },
            scope: column.scope,
            group: column.group.clone(),
        })
        .collect())
}

/// Reshapes `source` into the long (group, scope, value) table for one
/// selection.
///
/// The selection is expected to match exactly one record; zero or several
/// matches are logged and reshaped as-is (an empty table, or repeated blocks
/// of rows). The source table is never modified.
pub fn reshape(
    source: &DataFrame,
    selection: &Selection,
    template: &ChartTemplate,
    ctx: &ReshapeContext<'_>,
) -> Result<DataFrame> {
    let span = info_span!(
        "reshape",
        place = %selection.place,
        year = %selection.year,
        demographic = %selection.demographic
    );
    let _guard = span.enter();

    let resolved = resolve_columns(selection, template, ctx)?;
    let config = ctx.config;
    require_columns(
        source,
        [config.place_id_column.as_str(), config.year_column.as_str()],
        "selection filter",
    )?;
    require_columns(
        source,
        resolved.iter().map(|column| column.source.as_str()),
        "chart template",
    )?;

    let narrowed = select_columns(source, config, &resolved)?;
    let records = select_record_rows(
        narrowed,
        config,
        &config.place_id(selection.place.as_str()),
        &selection.year.as_key(),
    )?;
    match records.height() {
        1 => debug!("selection matched one record"),
        count => warn!(
            records = count,
            "selection should match exactly one record per place and year"
        ),
    }
    unpivot(&records, &resolved)
}

/// Reshapes one of the standard charts.
pub fn reshape_chart(
    source: &DataFrame,
    selection: &Selection,
    kind: ChartKind,
    ctx: &ReshapeContext<'_>,
) -> Result<ChartFrame> {
    let data = reshape(source, selection, &kind.template(), ctx)?;
    Ok(ChartFrame::new(kind.title(), data))
}
