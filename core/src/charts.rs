//! Declarative chart requests.
//!
//! RULE: the core never touches a plotting library. Each tab gets a
//! fixed ordered list of data-only chart requests (kind, field
//! bindings, title) that the rendering layer consumes. Field names
//! bind either to a dimension column or to a metric in the active
//! schema; bindings are resolved at config validation, never at render
//! time.
//!
//! Variant divergence: charts whose metrics a schema version lacks are
//! omitted from that variant's layout, and variant-specific extras are
//! appended when their metrics exist. The seven base charts are
//! mandatory — a schema that cannot bind one is a configuration error.

use crate::{
    error::{DashResult, DashboardError},
    schema::{self, MetricSchema},
};
use serde::{Deserialize, Serialize};

// Dimension column names, as the rendering layer sees them.
pub const YEAR: &str = "Year";
pub const SUBSIDIARY: &str = "Subsidiary";
pub const ASSET: &str = "Asset";

/// The derived what-if series; not a schema metric.
pub const SIMULATED_SERIES: &str = "Simulated Carbon Reduction (kg CO₂e)";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
    Area,
    Scatter,
}

/// One chart the rendering layer should draw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub x: String,
    pub y: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub title: String,
}

struct Template {
    kind: ChartKind,
    x: &'static str,
    y: &'static str,
    group: Option<&'static str>,
    size: Option<&'static str>,
    title: &'static str,
    mandatory: bool,
}

impl Template {
    fn request(&self) -> ChartRequest {
        ChartRequest {
            kind: self.kind,
            x: self.x.to_string(),
            y: self.y.to_string(),
            group: self.group.map(str::to_string),
            size: self.size.map(str::to_string),
            title: self.title.to_string(),
        }
    }

    /// Fields that must bind to a schema metric (dimension columns and
    /// the derived series are always available).
    fn metric_fields(&self) -> impl Iterator<Item = &'static str> {
        [Some(self.x), Some(self.y), self.group, self.size]
            .into_iter()
            .flatten()
            .filter(|f| !matches!(*f, YEAR | SUBSIDIARY | ASSET | SIMULATED_SERIES))
    }

    fn binds(&self, schema: &MetricSchema) -> bool {
        self.metric_fields().all(|f| schema.contains(f))
    }
}

/// Fixed ordered catalog shared by all four tabs. Order matters — the
/// rendering layer lays charts out two per column in catalog order.
fn catalog() -> Vec<Template> {
    vec![
        Template {
            kind: ChartKind::Bar,
            x: YEAR,
            y: schema::ENERGY_USAGE,
            group: Some(SUBSIDIARY),
            size: None,
            title: "Energy Usage Over Years (kWh/m²)",
            mandatory: true,
        },
        Template {
            kind: ChartKind::Pie,
            x: ASSET,
            y: schema::WASTE_RECYCLING,
            group: None,
            size: None,
            title: "Waste Recycling % by Asset",
            mandatory: true,
        },
        Template {
            kind: ChartKind::Line,
            x: YEAR,
            y: schema::WATER_USAGE,
            group: Some(ASSET),
            size: None,
            title: "Water Usage Trend (liters)",
            mandatory: true,
        },
        Template {
            kind: ChartKind::Area,
            x: YEAR,
            y: schema::EMBODIED_CARBON,
            group: Some(SUBSIDIARY),
            size: None,
            title: "Embodied Carbon Over Time (kg CO₂e)",
            mandatory: true,
        },
        Template {
            kind: ChartKind::Line,
            x: YEAR,
            y: schema::ENERGY_INTENSITY,
            group: Some(ASSET),
            size: None,
            title: "Energy Use Intensity (kWh/m²)",
            mandatory: true,
        },
        Template {
            kind: ChartKind::Scatter,
            x: schema::ROI,
            y: schema::EMBODIED_CARBON,
            group: Some(SUBSIDIARY),
            size: Some(schema::CERTIFICATION_SCORE),
            title: "ROI vs Carbon Impact",
            mandatory: true,
        },
        Template {
            kind: ChartKind::Line,
            x: YEAR,
            y: SIMULATED_SERIES,
            group: None,
            size: None,
            title: "Simulated Carbon Reduction (kg CO₂e)",
            mandatory: true,
        },
        // Variant extras — emitted only when the schema carries them.
        Template {
            kind: ChartKind::Line,
            x: YEAR,
            y: schema::RENEWABLE_SHARE,
            group: Some(SUBSIDIARY),
            size: None,
            title: "Renewable Energy Share Over Years (%)",
            mandatory: false,
        },
        Template {
            kind: ChartKind::Bar,
            x: YEAR,
            y: schema::WASTE_DIVERTED,
            group: Some(ASSET),
            size: None,
            title: "Waste Diverted From Landfill (kg)",
            mandatory: false,
        },
        Template {
            kind: ChartKind::Area,
            x: YEAR,
            y: schema::GREEN_SPACE,
            group: Some(SUBSIDIARY),
            size: None,
            title: "Green Space Ratio Over Time (%)",
            mandatory: false,
        },
    ]
}

/// Check that every mandatory binding resolves against the schema.
pub fn validate_layout(schema: &MetricSchema) -> DashResult<()> {
    for template in catalog().iter().filter(|t| t.mandatory) {
        for field in template.metric_fields() {
            if !schema.contains(field) {
                return Err(DashboardError::UnknownMetric {
                    name: field.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// The ordered chart list for one tab under the given schema.
pub fn tab_layout(schema: &MetricSchema) -> Vec<ChartRequest> {
    catalog()
        .iter()
        .filter(|t| t.binds(schema))
        .map(Template::request)
        .collect()
}
