//! Map focus for a (place, year) selection.

use polars::prelude::{DataFrame, DataType, IntoLazy, col, lit};
use tracing::debug;

use ntcna_common::{CENTROID_X_COLUMN, CENTROID_Y_COLUMN, any_to_f64};
use ntcna_model::{DashboardConfig, PlaceCode, Year};

use crate::data_utils::require_columns;
use crate::{Result, TransformError};

pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 20;

/// Where the map should centre, and the features to draw there.
#[derive(Debug, Clone)]
pub struct MapFocus {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: u8,
    pub title: String,
    /// Census rows for the selected place and year.
    pub features: DataFrame,
}

/// Selects the features of `place` in `year` and centres on the first one.
///
/// Falls back to the configured default coordinates when nothing matches or
/// the matched feature has no geometry.
pub fn map_focus(
    census: &DataFrame,
    config: &DashboardConfig,
    place: &PlaceCode,
    year: Year,
    zoom: u8,
) -> Result<MapFocus> {
    if !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
        return Err(TransformError::ZoomOutOfBounds(zoom));
    }
    require_columns(
        census,
        [config.year_column.as_str(), config.entity_column.as_str()],
        "map view",
    )?;
    let features = census
        .clone()
        .lazy()
        .filter(
            col(config.year_column.as_str())
                .cast(DataType::String)
                .eq(lit(year.as_key()))
                .and(
                    col(config.entity_column.as_str())
                        .cast(DataType::String)
                        .eq(lit(place.as_str().to_string())),
                ),
        )
        .collect()?;

    let centroid = first_centroid(&features)?;
    if centroid.is_none() {
        debug!(place = %place, year = %year, "no feature geometry, using default centre");
    }
    let (longitude, latitude) =
        centroid.unwrap_or((config.default_longitude, config.default_latitude));
    Ok(MapFocus {
        longitude,
        latitude,
        zoom,
        title: format!("Statistics for {year}"),
        features,
    })
}

fn first_centroid(features: &DataFrame) -> Result<Option<(f64, f64)>> {
    if features.height() == 0 {
        return Ok(None);
    }
    let (Ok(x), Ok(y)) = (
        features.column(CENTROID_X_COLUMN),
        features.column(CENTROID_Y_COLUMN),
    ) else {
        return Ok(None);
    };
    Ok(any_to_f64(x.get(0)?).zip(any_to_f64(y.get(0)?)))
}
