//! Synthetic fact-table generation.
//!
//! RULE: one row per (year, subsidiary, asset, phase) combination,
//! iterated in that fixed nested order. Row order is deterministic for
//! a given config; values are whatever the generator stream draws.
//! Every metric is sampled independently per row — no cross-row
//! correlation, no caching, no persistence. The table is rebuilt from
//! scratch on every pipeline invocation.

use crate::{
    config::DashboardConfig,
    error::DashResult,
    rng::StreamRng,
    schema::{MetricSchema, MetricValue},
    types::{Phase, Year},
};
use serde::{Deserialize, Serialize};

/// One observation at the (year, subsidiary, asset, phase) grain.
/// Metric values are positionally aligned with the table's schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactRow {
    pub year: Year,
    pub subsidiary: String,
    pub asset: String,
    pub phase: Phase,
    pub metrics: Vec<MetricValue>,
}

impl FactRow {
    /// Look up a metric value by schema name.
    pub fn metric(&self, schema: &MetricSchema, name: &str) -> Option<f64> {
        schema
            .index_of(name)
            .and_then(|i| self.metrics.get(i))
            .map(MetricValue::as_f64)
    }
}

/// The full synthetic fact table for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactTable {
    pub schema: MetricSchema,
    pub rows: Vec<FactRow>,
}

/// Generate the full Cartesian fact table.
/// Validates the config first — an empty dimension set refuses to run.
pub fn generate(config: &DashboardConfig, rng: &mut StreamRng) -> DashResult<FactTable> {
    config.validate()?;

    let schema = config.schema();
    let mut rows = Vec::with_capacity(config.expected_row_count());

    for &year in &config.years {
        for subsidiary in &config.subsidiaries {
            for asset in &config.assets {
                for &phase in &config.phases {
                    let metrics = schema
                        .metrics
                        .iter()
                        .map(|def| def.distribution.sample(rng))
                        .collect();
                    rows.push(FactRow {
                        year,
                        subsidiary: subsidiary.clone(),
                        asset: asset.clone(),
                        phase,
                        metrics,
                    });
                }
            }
        }
    }

    log::debug!(
        "generated {} fact rows ({} metrics each)",
        rows.len(),
        schema.len()
    );
    Ok(FactTable { schema, rows })
}
