//! Tests for the dashboard facade and the map focus.

mod support;

use ntcna_model::{ChartKind, DashboardConfig, DataSource, ModelError, PlaceCode, Year};
use ntcna_transform::{Dashboard, MAX_ZOOM, TransformError, map_focus};

use support::{census_frame, chas_frame};

fn dashboard() -> Dashboard {
    Dashboard::new(census_frame(), chas_frame(), DashboardConfig::default())
}

#[test]
fn starts_on_the_default_selection() {
    let dashboard = dashboard();
    let selection = dashboard.selection();
    assert_eq!(selection.place.as_str(), "43475");
    assert_eq!(selection.year.value(), 2011);
    assert_eq!(selection.demographic.as_str(), "total");
    assert_eq!(dashboard.source(DataSource::Chas).height(), 2);
}

#[test]
fn places_and_demographics_resolve_by_name() {
    let mut dashboard = dashboard();
    dashboard.set_place("Rosalie").unwrap();
    dashboard.set_demographic("native american").unwrap();
    assert_eq!(dashboard.selection().place.as_str(), "42250");
    assert_eq!(dashboard.selection().demographic.as_str(), "nat");

    let chart = dashboard.chart(ChartKind::MedianAge).unwrap();
    assert_eq!(chart.value("Median Age", "Rosalie"), Some(30.0));
}

#[test]
fn rejected_changes_keep_the_selection() {
    let mut dashboard = dashboard();
    let err = dashboard.set_year(2024).unwrap_err();
    assert!(matches!(
        err,
        TransformError::Model(ModelError::YearOutOfBounds { year: 2024, .. })
    ));
    assert!(dashboard.set_place("Omaha").is_err());
    assert_eq!(dashboard.selection().year.value(), 2011);
    assert_eq!(dashboard.selection().place.as_str(), "43475");
}

#[test]
fn years_come_from_the_census_table() {
    let years: Vec<u16> = dashboard()
        .available_years()
        .unwrap()
        .into_iter()
        .map(Year::value)
        .collect();
    assert_eq!(years, vec![2011, 2012]);
}

#[test]
fn charts_follow_display_order() {
    let charts = dashboard().charts().unwrap();
    let titles: Vec<&str> = charts.iter().map(|chart| chart.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Median Age", "Severe Housing Problems", "Poverty Rate", "Age Distribution"]
    );
    assert_eq!(charts[1].value("Severe Housing Problems", "US"), Some(18.0));
    assert_eq!(charts[3].row_count(), 9);
}

#[test]
fn map_centres_on_the_selected_feature() {
    let mut dashboard = dashboard();
    dashboard.set_year(2012).unwrap();
    let focus = dashboard.map_focus(12).unwrap();
    assert_eq!(focus.features.height(), 1);
    assert_eq!((focus.longitude, focus.latitude), (-97.85, 42.84));
    assert_eq!(focus.title, "Statistics for 2012");
}

#[test]
fn map_falls_back_to_default_centre() {
    let config = DashboardConfig::default();
    let focus = map_focus(
        &census_frame(),
        &config,
        &PlaceCode::new("30170").unwrap(),
        Year::new(2011).unwrap(),
        8,
    )
    .unwrap();
    assert_eq!(focus.features.height(), 0);
    assert_eq!(focus.longitude, config.default_longitude);
    assert_eq!(focus.latitude, config.default_latitude);
    assert_eq!(focus.zoom, 8);
}

#[test]
fn zoom_is_bounded() {
    let dashboard = dashboard();
    assert!(matches!(
        dashboard.map_focus(0),
        Err(TransformError::ZoomOutOfBounds(0))
    ));
    assert!(dashboard.map_focus(MAX_ZOOM).is_ok());
    assert!(dashboard.map_focus(MAX_ZOOM + 1).is_err());
}
