//! Tests for loading feature collections and CSV files.

use std::fs;

use ntcna_ingest::{
    CENTROID_X_COLUMN, CENTROID_Y_COLUMN, IngestOptions, load_config, parse_feature_collection,
    read_csv_frame, read_geojson_frame,
};
use ntcna_model::DashboardConfig;
use polars::prelude::DataType;

const COLLECTION: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": {"NAME": "Santee village", "GEOID": "1600000US3143475", "year": "2011",
                     "entityID": "43475", "pl_medage_total": 34, "st_medage_total": 36.5},
      "geometry": {"type": "Point", "coordinates": [-97.85, 42.84]}
    },
    {
      "type": "Feature",
      "properties": {"NAME": "Rosalie village", "GEOID": "1600000US3142250", "year": "2011",
                     "entityID": "42250", "pl_medage_total": 41},
      "geometry": null
    }
  ]
}"#;

#[test]
fn properties_become_typed_columns() {
    let options = IngestOptions::for_config(&DashboardConfig::default());
    let df = parse_feature_collection(COLLECTION, &options).expect("parse collection");
    assert_eq!(df.height(), 2);
    assert_eq!(df.column("pl_medage_total").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("st_medage_total").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("year").unwrap().dtype(), &DataType::String);
    assert_eq!(df.column("entityID").unwrap().dtype(), &DataType::String);

    let st = df.column("st_medage_total").unwrap().f64().unwrap();
    assert_eq!(st.get(1), None);
}

#[test]
fn centroids_are_added_per_feature() {
    let df = parse_feature_collection(COLLECTION, &IngestOptions::new()).unwrap();
    let x = df.column(CENTROID_X_COLUMN).unwrap().f64().unwrap();
    let y = df.column(CENTROID_Y_COLUMN).unwrap().f64().unwrap();
    assert_eq!(x.get(0), Some(-97.85));
    assert_eq!(y.get(0), Some(42.84));
    assert_eq!(x.get(1), None);
}

#[test]
fn reads_geojson_and_csv_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let geo_path = dir.path().join("census.geojson");
    fs::write(&geo_path, COLLECTION).unwrap();
    let df = read_geojson_frame(&geo_path, &IngestOptions::new()).expect("read geojson");
    assert_eq!(df.height(), 2);

    let csv_path = dir.path().join("orbits.csv");
    fs::write(
        &csv_path,
        "station_id,orbit_number,value_1\nA,1,0.5\n,,\nB,500,\n",
    )
    .unwrap();
    let df = read_csv_frame(&csv_path, &IngestOptions::new()).expect("read csv");
    assert_eq!(df.height(), 2);
    assert_eq!(df.column("orbit_number").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("value_1").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("station_id").unwrap().dtype(), &DataType::String);
}

#[test]
fn loads_partial_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("dashboard.json");
    fs::write(&path, r#"{"place_id_prefix": "31", "default_zoom": 9}"#).unwrap();
    let config = load_config(&path).expect("load config");
    assert_eq!(config.place_id_prefix, "31");
    assert_eq!(config.default_zoom, 9);
    assert_eq!(config.state_label, "Nebraska");
}
