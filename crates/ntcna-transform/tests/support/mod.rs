//! Shared fixtures for transform integration tests.
#![allow(dead_code)]

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use ntcna_common::{CENTROID_X_COLUMN, CENTROID_Y_COLUMN};

pub fn text_column(name: &str, values: &[&str]) -> Column {
    Series::new(
        name.into(),
        values.iter().copied().map(String::from).collect::<Vec<_>>(),
    )
    .into_column()
}

pub fn number_column(name: &str, values: &[f64]) -> Column {
    Series::new(name.into(), values.to_vec()).into_column()
}

/// Census rows: Santee 2011, Rosalie 2011, Santee 2012.
pub fn census_frame() -> DataFrame {
    DataFrame::new(vec![
        text_column("NAME", &["Santee village", "Rosalie village", "Santee village"]),
        text_column(
            "GEOID",
            &["1600000US3143475", "1600000US3142250", "1600000US3143475"],
        ),
        text_column("year", &["2011", "2011", "2012"]),
        text_column("entityID", &["43475", "42250", "43475"]),
        number_column("pl_medage_total", &[34.0, 41.0, 35.0]),
        number_column("st_medage_total", &[36.0, 36.0, 36.2]),
        number_column("us_medage_total", &[38.0, 38.0, 38.1]),
        number_column("pl_medage_nat", &[27.0, 30.0, 28.0]),
        number_column("st_medage_nat", &[25.0, 25.0, 25.5]),
        number_column("us_medage_nat", &[31.0, 31.0, 31.2]),
        number_column("pl_pov_total_18", &[52.0, 20.0, 50.0]),
        number_column("st_pov_total_18", &[15.0, 15.0, 14.0]),
        number_column("us_pov_total_18", &[21.0, 21.0, 20.5]),
        number_column("pl_pov_total_tot", &[40.0, 12.0, 39.0]),
        number_column("st_pov_total_tot", &[12.0, 12.0, 11.5]),
        number_column("us_pov_total_tot", &[15.0, 15.0, 14.8]),
        number_column("pl_age_total_und18", &[38.0, 25.0, 37.0]),
        number_column("st_age_total_und18", &[25.0, 25.0, 24.9]),
        number_column("us_age_total_und18", &[23.0, 23.0, 22.9]),
        number_column("pl_age_total_18_64", &[52.0, 55.0, 53.0]),
        number_column("st_age_total_18_64", &[61.0, 61.0, 61.0]),
        number_column("us_age_total_18_64", &[63.0, 63.0, 63.0]),
        number_column("pl_age_total_ov65", &[10.0, 20.0, 10.0]),
        number_column("st_age_total_ov65", &[14.0, 14.0, 14.1]),
        number_column("us_age_total_ov65", &[14.0, 14.0, 14.1]),
        number_column(CENTROID_X_COLUMN, &[-97.85, -96.51, -97.85]),
        number_column(CENTROID_Y_COLUMN, &[42.84, 42.06, 42.84]),
    ])
    .unwrap()
}

/// CHAS rows: Santee 2011 and Rosalie 2011.
pub fn chas_frame() -> DataFrame {
    DataFrame::new(vec![
        text_column("NAME", &["Santee village", "Rosalie village"]),
        text_column("GEOID", &["1600000US3143475", "1600000US3142250"]),
        text_column("year", &["2011", "2011"]),
        text_column("entityID", &["43475", "42250"]),
        number_column("pl_sev_housing", &[22.5, 9.0]),
        number_column("st_sev_housing", &[13.0, 13.0]),
        number_column("us_sev_housing", &[18.0, 18.0]),
    ])
    .unwrap()
}
