pub mod chart;
pub mod error;
pub mod filter;
pub mod ids;
pub mod lookup;
pub mod options;
pub mod selection;

pub use chart::{ChartKind, ChartTemplate, DataSource, MetricColumn, Scope};
pub use error::{ModelError, Result};
pub use filter::{FilterDecl, FilterKind, FilterValue};
pub use ids::{DemographicCode, MAX_YEAR, MIN_YEAR, PlaceCode, Year};
pub use lookup::CodeTable;
pub use options::DashboardConfig;
pub use selection::Selection;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_resolves_in_both_tables() {
        let selection = Selection::default();
        let places = CodeTable::places();
        let demographics = CodeTable::demographics();
        assert_eq!(
            places.name_for_code(selection.place.as_str()).unwrap(),
            "Santee"
        );
        assert_eq!(
            demographics
                .name_for_code(selection.demographic.as_str())
                .unwrap(),
            "Total Population"
        );
    }

    #[test]
    fn config_serializes() {
        let config = DashboardConfig::default();
        let json = serde_json::to_string(&config).expect("serialize config");
        let round: DashboardConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(round.state_label, "Nebraska");
        assert_eq!(round.place_id_prefix, config.place_id_prefix);
    }
}
