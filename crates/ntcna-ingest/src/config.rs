use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ntcna_model::DashboardConfig;

/// Loads a JSON dashboard configuration. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<DashboardConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse config: {}", path.display()))
}
