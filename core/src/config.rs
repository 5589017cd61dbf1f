//! Dashboard configuration — dimension sets and schema version.
//!
//! RULE: validate() runs before any row is generated. An empty
//! dimension set or a chart layout naming a metric the active schema
//! lacks refuses to start the pipeline; it never silently produces a
//! partial table.

use crate::{
    charts,
    error::{DashResult, DashboardError},
    schema::{MetricSchema, SchemaVersion},
    types::{Phase, Year},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    pub years: Vec<Year>,
    pub subsidiaries: Vec<String>,
    pub assets: Vec<String>,
    pub phases: Vec<Phase>,
    pub schema_version: SchemaVersion,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            years: (2019..2024).collect(),
            subsidiaries: vec![
                "Subsidiary A".to_string(),
                "Subsidiary B".to_string(),
                "Subsidiary C".to_string(),
            ],
            assets: vec![
                "Asset 1".to_string(),
                "Asset 2".to_string(),
                "Asset 3".to_string(),
            ],
            phases: Phase::ALL.to_vec(),
            schema_version: SchemaVersion::V1,
        }
    }
}

impl DashboardConfig {
    /// Load a config override from a JSON file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        Ok(config)
    }

    pub fn schema(&self) -> MetricSchema {
        self.schema_version.schema()
    }

    /// Fail fast on any configuration error.
    pub fn validate(&self) -> DashResult<()> {
        if self.years.is_empty() {
            return Err(DashboardError::EmptyDimension { name: "years" });
        }
        if self.subsidiaries.is_empty() {
            return Err(DashboardError::EmptyDimension { name: "subsidiaries" });
        }
        if self.assets.is_empty() {
            return Err(DashboardError::EmptyDimension { name: "assets" });
        }
        if self.phases.is_empty() {
            return Err(DashboardError::EmptyDimension { name: "phases" });
        }

        let schema = self.schema();
        schema.validate()?;

        // Every mandatory chart binding must resolve against this variant.
        charts::validate_layout(&schema)?;
        Ok(())
    }

    /// Cartesian product of the four dimension sets.
    pub fn expected_row_count(&self) -> usize {
        self.years.len() * self.subsidiaries.len() * self.assets.len() * self.phases.len()
    }
}
