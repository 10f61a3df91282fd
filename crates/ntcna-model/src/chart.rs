//! Declarative chart templates.
//!
//! Each chart pairs every source-column pattern with the scope and group it
//! belongs to, so the reshaped table can never label a value with the wrong
//! group. Patterns use `{scope}` for the scope prefix (`us`, `st`, `pl`) and
//! `{demographic}` for the selected demographic code.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DemographicCode, ModelError, Result};

/// One of the three comparison levels shown side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scope {
    National,
    State,
    Place,
}

impl Scope {
    /// Display order: US, state, place.
    pub const ALL: [Scope; 3] = [Scope::National, Scope::State, Scope::Place];

    /// Column-name prefix used by the source tables.
    pub fn prefix(self) -> &'static str {
        match self {
            Scope::National => "us",
            Scope::State => "st",
            Scope::Place => "pl",
        }
    }
}

/// Which loaded table a chart reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataSource {
    /// American Community Survey place tables.
    Census,
    /// Comprehensive Housing Affordability Strategy tables.
    Chas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    MedianAge,
    SevereHousing,
    Poverty,
    AgeDistribution,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::MedianAge,
        ChartKind::SevereHousing,
        ChartKind::Poverty,
        ChartKind::AgeDistribution,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::MedianAge => "Median Age",
            ChartKind::SevereHousing => "Severe Housing Problems",
            ChartKind::Poverty => "Poverty Rate",
            ChartKind::AgeDistribution => "Age Distribution",
        }
    }

    pub fn source(self) -> DataSource {
        match self {
            ChartKind::SevereHousing => DataSource::Chas,
            _ => DataSource::Census,
        }
    }

    pub fn template(self) -> ChartTemplate {
        let groups: &[(&str, &str)] = match self {
            ChartKind::MedianAge => &[("Median Age", "{scope}_medage_{demographic}")],
            ChartKind::SevereHousing => &[("Severe Housing Problems", "{scope}_sev_housing")],
            ChartKind::Poverty => &[
                ("Under 18", "{scope}_pov_{demographic}_18"),
                ("Total Population", "{scope}_pov_{demographic}_tot"),
            ],
            ChartKind::AgeDistribution => &[
                ("Under 18", "{scope}_age_{demographic}_und18"),
                ("18-64", "{scope}_age_{demographic}_18_64"),
                ("65+", "{scope}_age_{demographic}_ov65"),
            ],
        };
        ChartTemplate {
            columns: expand_groups(groups),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A source-column pattern paired with its scope and group label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricColumn {
    pub pattern: String,
    pub scope: Scope,
    pub group: String,
}

impl MetricColumn {
    pub fn new(pattern: impl Into<String>, scope: Scope, group: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            scope,
            group: group.into(),
        }
    }

    /// Substitutes the scope prefix and demographic code into the pattern.
    pub fn render(&self, demographic: &DemographicCode) -> String {
        self.pattern
            .replace("{scope}", self.scope.prefix())
            .replace("{demographic}", demographic.as_str())
    }

    pub fn uses_demographic(&self) -> bool {
        self.pattern.contains("{demographic}")
    }
}

/// Ordered column declarations for one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartTemplate {
    columns: Vec<MetricColumn>,
}

impl ChartTemplate {
    /// Validates that every group declares exactly one column per scope.
    pub fn new(columns: Vec<MetricColumn>) -> Result<Self> {
        if columns.is_empty() {
            return Err(ModelError::EmptyTemplate);
        }
        let template = Self { columns };
        for group in template.groups() {
            let mut seen = [0usize; 3];
            let mut found = 0usize;
            for column in template.columns.iter().filter(|c| c.group == group) {
                seen[column.scope as usize] += 1;
                found += 1;
            }
            if seen.iter().any(|count| *count != 1) {
                return Err(ModelError::ShapeMismatch {
                    group: group.to_string(),
                    found,
                });
            }
        }
        Ok(template)
    }

    pub fn columns(&self) -> &[MetricColumn] {
        &self.columns
    }

    /// Group labels in first-declaration order.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for column in &self.columns {
            if !groups.contains(&column.group.as_str()) {
                groups.push(column.group.as_str());
            }
        }
        groups
    }

    pub fn uses_demographic(&self) -> bool {
        self.columns.iter().any(MetricColumn::uses_demographic)
    }
}

fn expand_groups(groups: &[(&str, &str)]) -> Vec<MetricColumn> {
    let mut columns = Vec::with_capacity(groups.len() * Scope::ALL.len());
    for (group, pattern) in groups {
        for scope in Scope::ALL {
            columns.push(MetricColumn::new(*pattern, scope, *group));
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_templates_are_well_formed() {
        for kind in ChartKind::ALL {
            let template = kind.template();
            assert!(ChartTemplate::new(template.columns().to_vec()).is_ok());
        }
    }

    #[test]
    fn poverty_renders_both_groups() {
        let demographic = DemographicCode::new("white").unwrap();
        let rendered: Vec<String> = ChartKind::Poverty
            .template()
            .columns()
            .iter()
            .map(|c| c.render(&demographic))
            .collect();
        assert_eq!(
            rendered,
            vec![
                "us_pov_white_18",
                "st_pov_white_18",
                "pl_pov_white_18",
                "us_pov_white_tot",
                "st_pov_white_tot",
                "pl_pov_white_tot",
            ]
        );
    }

    #[test]
    fn housing_ignores_demographic() {
        assert!(!ChartKind::SevereHousing.template().uses_demographic());
        assert!(ChartKind::MedianAge.template().uses_demographic());
    }

    #[test]
    fn missing_scope_is_a_shape_mismatch() {
        let err = ChartTemplate::new(vec![
            MetricColumn::new("{scope}_x", Scope::National, "A"),
            MetricColumn::new("{scope}_x", Scope::State, "A"),
        ])
        .unwrap_err();
        assert!(matches!(err, ModelError::ShapeMismatch { found: 2, .. }));
    }
}
