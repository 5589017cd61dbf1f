//! Metric schema — the ordered list of metric fields on a fact row.
//!
//! Three near-duplicate dashboard variants shipped with slightly
//! different metric sets. They are modeled here as explicit schema
//! versions rather than three copies of the table: V1 is the canonical
//! set, V2 and V3 are the documented deltas.
//!
//! Bound semantics: every distribution is half-open [lo, hi) for both
//! integer and real draws.

use crate::{
    error::{DashResult, DashboardError},
    rng::StreamRng,
};
use serde::{Deserialize, Serialize};

/// A sampled metric value. Count metrics stay integral so the frame
/// serializes the way the source data looked (kWh, liters, kg CO₂e).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    Count(i64),
    Measure(f64),
}

impl MetricValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Count(v) => *v as f64,
            Self::Measure(v) => *v,
        }
    }
}

/// How a metric is drawn at generation time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Distribution {
    /// Bounded-integer uniform over [lo, hi). Count-like metrics.
    UniformInt { lo: i64, hi: i64 },
    /// Bounded-real uniform over [lo, hi). Intensity / percentage / score.
    UniformReal { lo: f64, hi: f64 },
}

impl Distribution {
    pub fn sample(&self, rng: &mut StreamRng) -> MetricValue {
        match self {
            Self::UniformInt { lo, hi } => MetricValue::Count(rng.uniform_int(*lo, *hi)),
            Self::UniformReal { lo, hi } => MetricValue::Measure(rng.uniform_real(*lo, *hi)),
        }
    }

    /// Whether a value lies within this distribution's declared bounds.
    pub fn contains(&self, value: &MetricValue) -> bool {
        match (self, value) {
            (Self::UniformInt { lo, hi }, MetricValue::Count(v)) => v >= lo && v < hi,
            (Self::UniformReal { lo, hi }, MetricValue::Measure(v)) => v >= lo && v < hi,
            _ => false,
        }
    }

    fn bounds_f64(&self) -> (f64, f64) {
        match self {
            Self::UniformInt { lo, hi } => (*lo as f64, *hi as f64),
            Self::UniformReal { lo, hi } => (*lo, *hi),
        }
    }
}

/// One named metric field and its sampling distribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricDef {
    pub name: String,
    pub distribution: Distribution,
}

impl MetricDef {
    fn new(name: &str, distribution: Distribution) -> Self {
        Self {
            name: name.to_string(),
            distribution,
        }
    }
}

/// The ordered metric schema for one dashboard variant.
/// Row metric vectors are positionally aligned with this list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricSchema {
    pub metrics: Vec<MetricDef>,
}

impl MetricSchema {
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Position of a metric by name, or None if the variant lacks it.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.metrics.iter().position(|m| m.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Reject duplicate names and inverted bounds before any row is
    /// generated. Configuration errors are fatal at startup.
    pub fn validate(&self) -> DashResult<()> {
        for (i, def) in self.metrics.iter().enumerate() {
            if self.metrics[..i].iter().any(|m| m.name == def.name) {
                return Err(DashboardError::DuplicateMetric {
                    name: def.name.clone(),
                });
            }
            let (lo, hi) = def.distribution.bounds_f64();
            if lo >= hi {
                return Err(DashboardError::InvalidBounds {
                    metric: def.name.clone(),
                    lo,
                    hi,
                });
            }
        }
        Ok(())
    }
}

// ── Metric field names ───────────────────────────────────────────────
// Shared with the chart layouts, so a rename cannot silently detach a
// chart from its column.

pub const ENERGY_USAGE: &str = "Energy Usage (kWh/m²)";
pub const ENERGY_INTENSITY: &str = "Energy Use Intensity (kWh/m²)";
pub const WASTE_RECYCLING: &str = "Waste Recycling (%)";
pub const WATER_USAGE: &str = "Water Usage (liters)";
pub const EMBODIED_CARBON: &str = "Embodied Carbon (kg CO₂e)";
pub const CERTIFICATION_SCORE: &str = "Certification Score (%)";
pub const AIR_QUALITY: &str = "Indoor Air Quality Index";
pub const TENANT_SATISFACTION: &str = "Tenant Satisfaction (%)";
pub const ROI: &str = "ROI (%)";
pub const RENEWABLE_SHARE: &str = "Renewable Energy Share (%)";
pub const WASTE_DIVERTED: &str = "Waste Diverted (kg)";
pub const GREEN_SPACE: &str = "Green Space Ratio (%)";

/// The shipped dashboard variants.
/// NEVER reorder or remove entries — only append.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVersion {
    V1,
    V2,
    V3,
}

impl SchemaVersion {
    /// Materialize the metric schema for this variant.
    pub fn schema(&self) -> MetricSchema {
        use Distribution::{UniformInt, UniformReal};

        let mut metrics = vec![
            MetricDef::new(ENERGY_USAGE, UniformInt { lo: 100, hi: 500 }),
            MetricDef::new(ENERGY_INTENSITY, UniformReal { lo: 80.0, hi: 150.0 }),
            MetricDef::new(WASTE_RECYCLING, UniformReal { lo: 30.0, hi: 90.0 }),
            MetricDef::new(WATER_USAGE, UniformInt { lo: 1000, hi: 5000 }),
            MetricDef::new(EMBODIED_CARBON, UniformInt { lo: 100, hi: 1000 }),
            MetricDef::new(CERTIFICATION_SCORE, UniformReal { lo: 50.0, hi: 100.0 }),
            MetricDef::new(AIR_QUALITY, UniformReal { lo: 70.0, hi: 100.0 }),
            MetricDef::new(TENANT_SATISFACTION, UniformReal { lo: 60.0, hi: 100.0 }),
            MetricDef::new(ROI, UniformReal { lo: 5.0, hi: 15.0 }),
        ];

        match self {
            Self::V1 => {}
            Self::V2 => {
                // V2 dropped the occupant-comfort metrics and tracks
                // renewable share instead.
                metrics.retain(|m| m.name != AIR_QUALITY && m.name != TENANT_SATISFACTION);
                metrics.push(MetricDef::new(
                    RENEWABLE_SHARE,
                    UniformReal { lo: 10.0, hi: 80.0 },
                ));
            }
            Self::V3 => {
                metrics.push(MetricDef::new(WASTE_DIVERTED, UniformInt { lo: 500, hi: 3000 }));
                metrics.push(MetricDef::new(
                    GREEN_SPACE,
                    UniformReal { lo: 5.0, hi: 40.0 },
                ));
            }
        }

        MetricSchema { metrics }
    }
}
