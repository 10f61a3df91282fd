//! Selection state and the standard charts.

use polars::prelude::DataFrame;
use tracing::{debug, info};

use ntcna_model::{
    ChartKind, CodeTable, DashboardConfig, DataSource, DemographicCode, PlaceCode, Selection, Year,
};

use crate::Result;
use crate::data_utils::available_years;
use crate::frame::ChartFrame;
use crate::map_view::{MapFocus, map_focus};
use crate::reshape::{ReshapeContext, reshape_chart};

/// The census and CHAS tables together with the current selection.
///
/// Source tables are fixed for the dashboard's lifetime; every selection
/// change is validated and charts are recomputed on request.
#[derive(Debug, Clone)]
pub struct Dashboard {
    census: DataFrame,
    chas: DataFrame,
    config: DashboardConfig,
    places: CodeTable,
    demographics: CodeTable,
    selection: Selection,
}

impl Dashboard {
    pub fn new(census: DataFrame, chas: DataFrame, config: DashboardConfig) -> Self {
        Self {
            census,
            chas,
            config,
            places: CodeTable::places(),
            demographics: CodeTable::demographics(),
            selection: Selection::default(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn places(&self) -> &CodeTable {
        &self.places
    }

    pub fn demographics(&self) -> &CodeTable {
        &self.demographics
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn source(&self, source: DataSource) -> &DataFrame {
        match source {
            DataSource::Census => &self.census,
            DataSource::Chas => &self.chas,
        }
    }

    /// Replaces the whole selection after checking both codes.
    pub fn select(&mut self, selection: Selection) -> Result<()> {
        selection.validate(&self.places, &self.demographics)?;
        debug!(
            place = %selection.place,
            year = %selection.year,
            demographic = %selection.demographic,
            "selection changed"
        );
        self.selection = selection;
        Ok(())
    }

    /// Sets the place from a code or a name.
    pub fn set_place(&mut self, place: &str) -> Result<()> {
        let code = PlaceCode::new(self.places.resolve(place)?)?;
        let mut selection = self.selection.clone();
        selection.place = code;
        self.select(selection)
    }

    pub fn set_year(&mut self, year: i64) -> Result<()> {
        let mut selection = self.selection.clone();
        selection.year = Year::new(year)?;
        self.select(selection)
    }

    /// Sets the demographic from a code or a name.
    pub fn set_demographic(&mut self, demographic: &str) -> Result<()> {
        let code = DemographicCode::new(self.demographics.resolve(demographic)?)?;
        let mut selection = self.selection.clone();
        selection.demographic = code;
        self.select(selection)
    }

    /// Years present in the census table.
    pub fn available_years(&self) -> Result<Vec<Year>> {
        available_years(&self.census, &self.config.year_column)
    }

    pub fn chart(&self, kind: ChartKind) -> Result<ChartFrame> {
        let ctx = ReshapeContext {
            places: &self.places,
            demographics: &self.demographics,
            config: &self.config,
        };
        let frame = reshape_chart(self.source(kind.source()), &self.selection, kind, &ctx)?;
        info!(chart = kind.title(), rows = frame.row_count(), "chart reshaped");
        Ok(frame)
    }

    /// All four standard charts in display order.
    pub fn charts(&self) -> Result<Vec<ChartFrame>> {
        ChartKind::ALL.iter().map(|kind| self.chart(*kind)).collect()
    }

    pub fn map_focus(&self, zoom: u8) -> Result<MapFocus> {
        map_focus(
            &self.census,
            &self.config,
            &self.selection.place,
            self.selection.year,
            zoom,
        )
    }
}
