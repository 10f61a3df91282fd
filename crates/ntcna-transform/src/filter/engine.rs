use polars::prelude::{AnyValue, BooleanChunked, DataFrame, DataType, NewChunkedArray};
use tracing::{debug, info, info_span};

use ntcna_common::{any_is_null, any_to_f64, any_to_string};
use ntcna_model::{FilterDecl, FilterKind, FilterValue};

use super::bounds::column_extent;
use super::events::{FilterEvent, FilterObserver};
use crate::{Result, TransformError};

/// One declared filter with its extents and current value.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    decl: FilterDecl,
    full_extent: Option<FilterValue>,
    subset_bounds: Option<FilterValue>,
    value: Option<FilterValue>,
    user_set: bool,
}

impl FilterState {
    fn new(decl: FilterDecl) -> Self {
        Self {
            decl,
            full_extent: None,
            subset_bounds: None,
            value: None,
            user_set: false,
        }
    }

    pub fn column(&self) -> &str {
        &self.decl.column
    }

    pub fn kind(&self) -> FilterKind {
        self.decl.kind
    }

    /// Extent over the whole source table.
    pub fn full_extent(&self) -> Option<&FilterValue> {
        self.full_extent.as_ref()
    }

    /// Extent over the current filtered subset.
    pub fn subset_bounds(&self) -> Option<&FilterValue> {
        self.subset_bounds.as_ref()
    }

    /// The value the filter currently applies. `None` only when the source
    /// column has no values and the user has not set one.
    pub fn value(&self) -> Option<&FilterValue> {
        self.value.as_ref()
    }

    /// True once the user has set this filter since the last reset.
    pub fn is_user_set(&self) -> bool {
        self.user_set
    }

    /// Whether a cell passes this filter. Nulls, NaN and non-numeric cells of
    /// a range column pass until the user sets the filter.
    ///
    /// Range comparisons are done in `f64`: integers beyond 2^53 in magnitude
    /// are rounded, so neighbouring large values can compare equal.
    fn admits(&self, cell: AnyValue<'_>) -> bool {
        let Some(value) = &self.value else {
            return true;
        };
        if any_is_null(&cell) {
            return !self.user_set;
        }
        match value {
            FilterValue::Range { .. } => match any_to_f64(cell) {
                Some(number) if !number.is_nan() => value.contains_number(number),
                _ => !self.user_set,
            },
            FilterValue::Categories(_) => value.contains_category(&any_to_string(cell)),
        }
    }
}

/// Filters one source table by a fixed set of declared columns.
///
/// Setting a filter value through [`FilterEngine::set_filter`] raises a
/// [`FilterEvent::UserChanged`], which recomputes the filtered table once
/// while the auto-apply link is attached. After each recomputation every
/// filter's value is moved to the bounds of the filtered subset with the link
/// detached, so the adjustment cannot trigger another pass.
pub struct FilterEngine {
    source: DataFrame,
    filtered: DataFrame,
    filters: Vec<FilterState>,
    auto_apply: bool,
    recomputations: usize,
    observers: Vec<Box<dyn FilterObserver>>,
}

impl std::fmt::Debug for FilterEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterEngine")
            .field("source_rows", &self.source.height())
            .field("filtered_rows", &self.filtered.height())
            .field("filters", &self.filters)
            .field("auto_apply", &self.auto_apply)
            .field("recomputations", &self.recomputations)
            .finish_non_exhaustive()
    }
}

impl FilterEngine {
    /// Builds an engine over `source`. Every declared column must exist.
    pub fn new(source: DataFrame, decls: Vec<FilterDecl>) -> Result<Self> {
        let mut engine = Self {
            filtered: source.clone(),
            source: DataFrame::empty(),
            filters: decls.into_iter().map(FilterState::new).collect(),
            auto_apply: true,
            recomputations: 0,
            observers: Vec::new(),
        };
        engine.set_source(source)?;
        Ok(engine)
    }

    /// Declares a range filter for every numeric column and a category
    /// filter for every string column, skipping `exclude`.
    pub fn from_columns(source: DataFrame, exclude: &[&str]) -> Result<Self> {
        let mut decls = Vec::new();
        for column in source.get_columns() {
            let name = column.name().as_str();
            if exclude.contains(&name) {
                continue;
            }
            let kind = match column.dtype() {
                dtype if dtype.is_primitive_numeric() => FilterKind::Range,
                DataType::String => FilterKind::Category,
                _ => continue,
            };
            decls.push(FilterDecl::new(name, kind)?);
        }
        Self::new(source, decls)
    }

    pub fn source(&self) -> &DataFrame {
        &self.source
    }

    pub fn filtered(&self) -> &DataFrame {
        &self.filtered
    }

    pub fn filters(&self) -> &[FilterState] {
        &self.filters
    }

    pub fn filter(&self, column: &str) -> Option<&FilterState> {
        self.filters.iter().find(|state| state.column() == column)
    }

    /// How many times `filtered` has been recomputed by `apply_filters`.
    pub fn recompute_count(&self) -> usize {
        self.recomputations
    }

    pub fn is_auto_apply_attached(&self) -> bool {
        self.auto_apply
    }

    /// Re-links user filter changes to `apply_filters`.
    pub fn attach_auto_apply(&mut self) {
        self.auto_apply = true;
    }

    /// Unlinks user filter changes from `apply_filters`; values still update.
    pub fn detach_auto_apply(&mut self) {
        self.auto_apply = false;
    }

    pub fn subscribe(&mut self, observer: impl FilterObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replaces the source table and resets every filter to the full extent
    /// of its column. Does not run `apply_filters`.
    pub fn set_source(&mut self, source: DataFrame) -> Result<()> {
        for state in &self.filters {
            if source.column(state.column()).is_err() {
                return Err(TransformError::MissingFilterColumn(
                    state.column().to_string(),
                ));
            }
        }
        self.filtered = source.clone();
        self.source = source;
        for state in &mut self.filters {
            state.user_set = false;
        }
        info!(
            rows = self.source.height(),
            filters = self.filters.len(),
            "filter source reset"
        );
        self.notify(&FilterEvent::SourceReset {
            rows: self.source.height(),
        });
        self.adjust_filters(true)
    }

    /// Resets every filter against the current source.
    pub fn reset_filters(&mut self) -> Result<()> {
        let source = self.source.clone();
        self.set_source(source)
    }

    /// Sets a filter value as a user change.
    ///
    /// A value reaching past the column's full extent is clamped to it; a
    /// range entirely outside the extent becomes a degenerate range.
    pub fn set_filter(&mut self, column: &str, value: FilterValue) -> Result<()> {
        let state = self
            .filters
            .iter_mut()
            .find(|state| state.column() == column)
            .ok_or_else(|| TransformError::UnknownFilter(column.to_string()))?;
        if state.kind() != value.kind() {
            return Err(TransformError::FilterKindMismatch {
                column: column.to_string(),
                expected: state.kind(),
                found: value.kind(),
            });
        }
        let value = match &state.full_extent {
            Some(extent) if !value.is_within(extent) => {
                let clamped = value.clamp_to(extent);
                debug!(
                    column,
                    requested = ?value,
                    applied = ?clamped,
                    "filter value clamped to full extent"
                );
                clamped
            }
            _ => value,
        };
        state.value = Some(value);
        state.user_set = true;
        debug!(column, "filter changed by user");
        self.dispatch(FilterEvent::UserChanged {
            column: column.to_string(),
        })
    }

    /// Recomputes `filtered` from the source and the current filter values
    /// (all filters combined with AND), then narrows every filter to the
    /// bounds of the result.
    pub fn apply_filters(&mut self) -> Result<&DataFrame> {
        let span = info_span!("apply_filters", source_rows = self.source.height());
        let _guard = span.enter();

        let height = self.source.height();
        let mut keep = vec![true; height];
        for state in &self.filters {
            if state.value.is_none() {
                continue;
            }
            let column = self.source.column(state.column())?;
            for (idx, slot) in keep.iter_mut().enumerate() {
                if *slot {
                    *slot = state.admits(column.get(idx)?);
                }
            }
        }
        let mask = BooleanChunked::from_slice("filter".into(), &keep);
        self.filtered = self.source.filter(&mask)?;
        self.recomputations += 1;
        let rows = self.filtered.height();
        info!(rows, "filters applied");
        self.notify(&FilterEvent::Filtered { rows });

        self.adjust_filters(false)?;
        Ok(&self.filtered)
    }

    /// Moves every filter's value to the bounds of the filtered subset
    /// (and, on a source reset, recomputes the full extents first).
    fn adjust_filters(&mut self, reset_extents: bool) -> Result<()> {
        let was_attached = self.auto_apply;
        self.auto_apply = false;
        let result = self.adjust_filters_detached(reset_extents);
        self.auto_apply = was_attached;
        result
    }

    fn adjust_filters_detached(&mut self, reset_extents: bool) -> Result<()> {
        let mut adjusted = Vec::with_capacity(self.filters.len());
        for state in &mut self.filters {
            let kind = state.kind();
            if reset_extents {
                state.full_extent = column_extent(self.source.column(state.column())?, kind)?;
            }
            let subset = column_extent(self.filtered.column(state.column())?, kind)?;
            state.subset_bounds = subset.clone();
            // An empty subset has no extent; the applied value stays in force.
            if reset_extents || subset.is_some() {
                state.value = subset;
            }
            debug!(column = state.column(), value = ?state.value, "filter bounds adjusted");
            adjusted.push(state.column().to_string());
        }
        for column in adjusted {
            self.dispatch(FilterEvent::BoundsAdjusted { column })?;
        }
        Ok(())
    }

    fn dispatch(&mut self, event: FilterEvent) -> Result<()> {
        self.notify(&event);
        if event.is_user_change() && self.auto_apply {
            self.apply_filters()?;
        }
        Ok(())
    }

    fn notify(&mut self, event: &FilterEvent) {
        for observer in &mut self.observers {
            observer.on_filter_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    use super::*;

    fn orbit_frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("orbit_number".into(), vec![1i64, 120, 180, 500]).into_column(),
            Series::new("station_id".into(), vec!["A", "B", "A", "C"]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn set_source_does_not_recompute() {
        let engine = FilterEngine::new(
            orbit_frame(),
            vec![FilterDecl::range("orbit_number").unwrap()],
        )
        .unwrap();
        assert_eq!(engine.recompute_count(), 0);
        assert_eq!(
            engine.filter("orbit_number").unwrap().value(),
            Some(&FilterValue::range(1.0, 500.0))
        );
    }

    #[test]
    fn detached_link_defers_filtering() {
        let mut engine = FilterEngine::new(
            orbit_frame(),
            vec![FilterDecl::category("station_id").unwrap()],
        )
        .unwrap();
        engine.detach_auto_apply();
        engine
            .set_filter("station_id", FilterValue::categories(["A"]))
            .unwrap();
        assert_eq!(engine.recompute_count(), 0);
        assert_eq!(engine.filtered().height(), 4);
        engine.apply_filters().unwrap();
        assert_eq!(engine.filtered().height(), 2);
        assert!(!engine.is_auto_apply_attached());
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let mut engine = FilterEngine::new(
            orbit_frame(),
            vec![FilterDecl::range("orbit_number").unwrap()],
        )
        .unwrap();
        let err = engine
            .set_filter("orbit_number", FilterValue::categories(["1"]))
            .unwrap_err();
        assert!(matches!(err, TransformError::FilterKindMismatch { .. }));
    }
}
