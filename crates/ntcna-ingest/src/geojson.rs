//! GeoJSON feature-collection loading.
//!
//! Feature properties become DataFrame columns. Geometries are reduced to a
//! centroid, stored in [`CENTROID_X_COLUMN`] / [`CENTROID_Y_COLUMN`], which is
//! all the map view needs to centre on a place.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use polars::prelude::DataFrame;
use serde_json::Value;
use tracing::{debug, info};

use crate::frame_builder::{Cell, FrameBuilder, IngestOptions};

pub use ntcna_common::{CENTROID_X_COLUMN, CENTROID_Y_COLUMN};

/// Reads a GeoJSON `FeatureCollection` file.
pub fn read_geojson_frame(path: &Path, options: &IngestOptions) -> Result<DataFrame> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read geojson: {}", path.display()))?;
    let frame = parse_feature_collection(&text, options)
        .with_context(|| format!("parse geojson: {}", path.display()))?;
    info!(
        path = %path.display(),
        rows = frame.height(),
        columns = frame.width(),
        "loaded feature collection"
    );
    Ok(frame)
}

pub fn parse_feature_collection(text: &str, options: &IngestOptions) -> Result<DataFrame> {
    let root: Value = serde_json::from_str(text).context("invalid json")?;
    if root.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
        bail!("expected a FeatureCollection");
    }
    let features = root
        .get("features")
        .and_then(Value::as_array)
        .context("FeatureCollection has no features array")?;

    let mut builder = FrameBuilder::new();
    for (idx, feature) in features.iter().enumerate() {
        let mut cells: Vec<(String, Cell)> = Vec::new();
        match feature.get("properties") {
            Some(Value::Object(properties)) => {
                for (key, value) in properties {
                    cells.push((key.clone(), json_cell(value)));
                }
            }
            Some(Value::Null) | None => {}
            Some(_) => bail!("feature {idx} has non-object properties"),
        }
        let centroid = feature.get("geometry").and_then(geometry_centroid);
        if centroid.is_none() {
            debug!(feature = idx, "feature has no usable geometry");
        }
        let (x, y) = match centroid {
            Some((x, y)) => (Cell::Number(x), Cell::Number(y)),
            None => (Cell::Null, Cell::Null),
        };
        cells.push((CENTROID_X_COLUMN.to_string(), x));
        cells.push((CENTROID_Y_COLUMN.to_string(), y));
        builder.push_row(cells);
    }
    builder.build(options)
}

fn json_cell(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Null,
        Value::Number(number) => number.as_f64().map_or(Cell::Null, Cell::Number),
        Value::String(text) if text.trim().is_empty() => Cell::Null,
        Value::String(text) => Cell::Text(text.clone()),
        Value::Bool(flag) => Cell::Text(flag.to_string()),
        other => Cell::Text(other.to_string()),
    }
}

/// Centroid of a GeoJSON geometry object as `(x, y)`, i.e. (longitude,
/// latitude).
///
/// Polygons use the area-weighted centroid of their exterior ring; holes are
/// ignored. Rings with zero area fall back to the mean of their vertices.
pub fn geometry_centroid(geometry: &Value) -> Option<(f64, f64)> {
    let kind = geometry.get("type")?.as_str()?;
    if kind == "GeometryCollection" {
        return geometry
            .get("geometries")?
            .as_array()?
            .iter()
            .find_map(geometry_centroid);
    }
    let coordinates = geometry.get("coordinates")?;
    match kind {
        "Point" => point(coordinates),
        "MultiPoint" | "LineString" => vertex_mean(&points(coordinates)?),
        "MultiLineString" => {
            let all: Vec<(f64, f64)> = coordinates
                .as_array()?
                .iter()
                .filter_map(points)
                .flatten()
                .collect();
            vertex_mean(&all)
        }
        "Polygon" => {
            let ring = points(coordinates.as_array()?.first()?)?;
            ring_centroid(&ring).map(|(c, _)| c)
        }
        "MultiPolygon" => {
            let mut weighted = (0.0, 0.0);
            let mut total_area = 0.0;
            let mut fallback = Vec::new();
            for polygon in coordinates.as_array()? {
                let Some(ring) = polygon.as_array().and_then(|r| r.first()).and_then(points)
                else {
                    continue;
                };
                if let Some(((x, y), area)) = ring_centroid(&ring) {
                    weighted.0 += x * area;
                    weighted.1 += y * area;
                    total_area += area;
                    fallback.push((x, y));
                }
            }
            if total_area > 0.0 {
                Some((weighted.0 / total_area, weighted.1 / total_area))
            } else {
                vertex_mean(&fallback)
            }
        }
        _ => None,
    }
}

fn point(value: &Value) -> Option<(f64, f64)> {
    let coords = value.as_array()?;
    Some((coords.first()?.as_f64()?, coords.get(1)?.as_f64()?))
}

fn points(value: &Value) -> Option<Vec<(f64, f64)>> {
    value.as_array()?.iter().map(point).collect()
}

fn vertex_mean(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
    Some((sx / n, sy / n))
}

/// Returns the centroid and the absolute area of a ring.
fn ring_centroid(ring: &[(f64, f64)]) -> Option<((f64, f64), f64)> {
    if ring.len() < 3 {
        return vertex_mean(ring).map(|c| (c, 0.0));
    }
    let mut twice_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for idx in 0..ring.len() {
        let (x0, y0) = ring[idx];
        let (x1, y1) = ring[(idx + 1) % ring.len()];
        let cross = x0 * y1 - x1 * y0;
        twice_area += cross;
        cx += (x0 + x1) * cross;
        cy += (y0 + y1) * cross;
    }
    if twice_area.abs() < f64::EPSILON {
        return vertex_mean(ring).map(|c| (c, 0.0));
    }
    let factor = 1.0 / (3.0 * twice_area);
    Some(((cx * factor, cy * factor), (twice_area / 2.0).abs()))
}
