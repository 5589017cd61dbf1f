//! The dashboard pipeline — one full recomputation per interaction.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Validate the config (fatal on configuration errors)
//!   2. Generate the fact table      (generator stream)
//!   3. Apply the user selection
//!   4. Per tab: slice by phase, map the simulation series
//!      (simulation stream), attach the chart layout
//!
//! RULES:
//!   - Single-threaded and blocking; each invocation owns its data.
//!   - No state survives an invocation. The host UI re-runs the whole
//!     pipeline on every filter change or slider move.
//!   - All randomness flows through the RngBank.

use crate::{
    charts::{self, ChartRequest},
    config::DashboardConfig,
    error::DashResult,
    filter::{self, Selection},
    generator::{self, FactRow},
    rng::{RngBank, StreamSlot},
    schema::SchemaVersion,
    simulation::{self, SliderInput},
    types::Phase,
};
use serde::{Deserialize, Serialize};

/// The four dashboard tabs.
/// NEVER reorder — the rendering layer shows them in this order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Building,
    Construction,
    PostConstruction,
    Financial,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Building,
        Tab::Construction,
        Tab::PostConstruction,
        Tab::Financial,
    ];

    /// The phase slice backing this tab. Financial sees all phases.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Building => Some(Phase::Building),
            Self::Construction => Some(Phase::Construction),
            Self::PostConstruction => Some(Phase::PostConstruction),
            Self::Financial => None,
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Self::Building => "Building Phase ESG Analytics",
            Self::Construction => "Construction Phase ESG Analytics",
            Self::PostConstruction => "Post-Construction ESG Analytics",
            Self::Financial => "Financial & Certification Impact",
        }
    }

    pub fn slider_label(&self) -> &'static str {
        match self {
            Self::Building => "Investment in Sustainable Materials (%)",
            Self::Construction => "Renewable Energy Usage (%)",
            Self::PostConstruction => "Smart Energy System Investment (%)",
            Self::Financial => "ESG CapEx Increase (%)",
        }
    }
}

/// One slider position per tab.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TabSliders {
    pub building: SliderInput,
    pub construction: SliderInput,
    pub post_construction: SliderInput,
    pub financial: SliderInput,
}

impl TabSliders {
    /// The same position on every tab.
    pub fn uniform(input: SliderInput) -> Self {
        Self {
            building: input,
            construction: input,
            post_construction: input,
            financial: input,
        }
    }

    pub fn for_tab(&self, tab: Tab) -> SliderInput {
        match tab {
            Tab::Building => self.building,
            Tab::Construction => self.construction,
            Tab::PostConstruction => self.post_construction,
            Tab::Financial => self.financial,
        }
    }
}

/// Everything one interaction supplies: filters plus slider positions.
/// Immutable for the duration of the invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardRequest {
    pub selection: Selection,
    pub sliders: TabSliders,
}

/// One rendered tab: its data slice, simulation series, and charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabView {
    pub tab: Tab,
    pub header: String,
    pub slider_label: String,
    pub rows: Vec<FactRow>,
    pub simulated: Vec<f64>,
    pub charts: Vec<ChartRequest>,
}

/// The full result of one pipeline invocation. Derived, read-only,
/// discarded by the rendering layer after drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardFrame {
    pub seed: u64,
    pub schema_version: SchemaVersion,
    pub total_rows: usize,
    pub filtered_rows: usize,
    pub views: Vec<TabView>,
}

/// Run the whole pipeline: generate → filter → slice → map → layout.
pub fn run(
    config: &DashboardConfig,
    seed: u64,
    request: &DashboardRequest,
) -> DashResult<DashboardFrame> {
    config.validate()?;

    let bank = RngBank::new(seed);
    let mut gen_rng = bank.for_stream(StreamSlot::Generator);
    let table = generator::generate(config, &mut gen_rng)?;

    let filtered = request.selection.apply(&table.rows);
    log::debug!(
        "selection kept {} of {} rows (seed {seed})",
        filtered.len(),
        table.rows.len()
    );
    if filtered.is_empty() && !request.selection.is_unconstrained() {
        log::warn!("selection matched no rows: {:?}", request.selection);
    }

    let mut sim_rng = bank.for_stream(StreamSlot::Simulation);
    let charts = charts::tab_layout(&table.schema);

    let views = Tab::ALL
        .iter()
        .map(|&tab| {
            let rows = match tab.phase() {
                Some(phase) => filter::slice_phase(&filtered, phase),
                None => filtered.clone(),
            };
            let simulated =
                simulation::map_simulation(request.sliders.for_tab(tab), &rows, &mut sim_rng);
            TabView {
                tab,
                header: tab.header().to_string(),
                slider_label: tab.slider_label().to_string(),
                rows,
                simulated,
                charts: charts.clone(),
            }
        })
        .collect();

    Ok(DashboardFrame {
        seed,
        schema_version: config.schema_version,
        total_rows: table.rows.len(),
        filtered_rows: filtered.len(),
        views,
    })
}
