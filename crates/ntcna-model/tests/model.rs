//! Integration tests for the dashboard model.

use ntcna_model::{
    ChartKind, CodeTable, DashboardConfig, ModelError, Scope, Selection, Year, MAX_YEAR,
    MIN_YEAR,
};

#[test]
fn year_bounds_are_inclusive() {
    assert_eq!(Year::new(2011).unwrap().value(), MIN_YEAR);
    assert_eq!(Year::new(2020).unwrap().value(), MAX_YEAR);
    assert!(matches!(
        Year::new(2021),
        Err(ModelError::YearOutOfBounds { year: 2021, .. })
    ));
    assert!(Year::new(2010).is_err());
}

#[test]
fn year_deserializes_through_bounds_check() {
    let year: Year = serde_json::from_str("2015").unwrap();
    assert_eq!(year.as_key(), "2015");
    assert!(serde_json::from_str::<Year>("1999").is_err());
}

#[test]
fn selection_parse_accepts_names() {
    let places = CodeTable::places();
    let demographics = CodeTable::demographics();
    let selection = Selection::parse(&places, &demographics, "Macy", 2016, "Native American")
        .expect("parse selection");
    assert_eq!(selection.place.as_str(), "30170");
    assert_eq!(selection.demographic.as_str(), "nat");
    assert_eq!(selection.year.value(), 2016);
}

#[test]
fn selection_parse_rejects_unknown_place() {
    let err = Selection::parse(
        &CodeTable::places(),
        &CodeTable::demographics(),
        "99999",
        2011,
        "total",
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::UnknownName { table: "place", .. }));
}

#[test]
fn age_distribution_declares_three_groups() {
    let template = ChartKind::AgeDistribution.template();
    assert_eq!(template.groups(), vec!["Under 18", "18-64", "65+"]);
    assert_eq!(template.columns().len(), 9);
    assert_eq!(template.columns()[2].scope, Scope::Place);
}

#[test]
fn config_partial_json_keeps_defaults() {
    let config: DashboardConfig =
        serde_json::from_str(r#"{"state_label": "Iowa", "data_dir": "/srv/data"}"#).unwrap();
    assert_eq!(config.state_label, "Iowa");
    assert_eq!(config.year_column, "year");
    assert_eq!(
        config.census_path(),
        std::path::PathBuf::from("/srv/data/ne_ntcna_places_census.geojson")
    );
    assert_eq!(config.place_id("43475"), "1600000US3143475");
}
