//! Dashboard configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where the source tables live and how their identity columns are named.
///
/// Every field has a default, so a configuration file only needs the values
/// it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding the source files.
    pub data_dir: PathBuf,
    /// Census feature collection, relative to `data_dir`.
    pub census_file: PathBuf,
    /// CHAS feature collection, relative to `data_dir`.
    pub chas_file: PathBuf,

    /// Display label of the state-level scope.
    pub state_label: String,
    /// Prefix joined with a place code to form the place identifier column
    /// value (summary level plus state FIPS code).
    pub place_id_prefix: String,

    pub name_column: String,
    pub place_id_column: String,
    pub year_column: String,
    pub entity_column: String,

    pub default_longitude: f64,
    pub default_latitude: f64,
    pub default_zoom: u8,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            census_file: PathBuf::from("ne_ntcna_places_census.geojson"),
            chas_file: PathBuf::from("ne_ntcna_places_chas.geojson"),
            state_label: "Nebraska".to_string(),
            place_id_prefix: "1600000US31".to_string(),
            name_column: "NAME".to_string(),
            place_id_column: "GEOID".to_string(),
            year_column: "year".to_string(),
            entity_column: "entityID".to_string(),
            default_longitude: -97.21714077402164,
            default_latitude: 42.35875453986342,
            default_zoom: 12,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn with_state_label(mut self, label: impl Into<String>) -> Self {
        self.state_label = label.into();
        self
    }

    pub fn census_path(&self) -> PathBuf {
        self.data_dir.join(&self.census_file)
    }

    pub fn chas_path(&self) -> PathBuf {
        self.data_dir.join(&self.chas_file)
    }

    /// The place identifier stored in `place_id_column` for a place code.
    pub fn place_id(&self, place_code: &str) -> String {
        format!("{}{}", self.place_id_prefix, place_code)
    }

    /// Identity columns, which are never filtered or renamed.
    pub fn identity_columns(&self) -> [&str; 4] {
        [
            self.name_column.as_str(),
            self.place_id_column.as_str(),
            self.year_column.as_str(),
            self.entity_column.as_str(),
        ]
    }
}
