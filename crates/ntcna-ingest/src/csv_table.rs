use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use polars::prelude::DataFrame;
use tracing::debug;

use crate::frame_builder::{Cell, FrameBuilder, IngestOptions};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a headed CSV file into a typed DataFrame.
///
/// Blank rows are skipped and short rows are padded with nulls.
pub fn read_csv_frame(path: &Path, options: &IngestOptions) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read csv header: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut builder = FrameBuilder::with_headers(headers.iter().cloned());
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        builder.push_row(
            headers
                .iter()
                .enumerate()
                .map(|(idx, header)| (header, Cell::from_raw(record.get(idx).unwrap_or("")))),
        );
    }
    debug!(
        path = %path.display(),
        rows = builder.row_count(),
        columns = headers.len(),
        "read csv"
    );
    builder.build(options)
}
