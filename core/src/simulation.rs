//! Simulation value mapper — the "what-if" slider series.
//!
//! Purely illustrative: the derived values never feed back into the
//! fact table. Each row gets `input * 10` plus an independent jitter
//! draw from [0, 10), so the series rises with the slider in
//! expectation but carries per-row noise.

use crate::{
    error::{DashResult, DashboardError},
    generator::FactRow,
    rng::StreamRng,
};
use serde::{Deserialize, Serialize};

/// A validated slider position in [0, 100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SliderInput(u8);

impl SliderInput {
    pub fn new(value: u32) -> DashResult<Self> {
        if value > 100 {
            return Err(DashboardError::SliderOutOfRange { value });
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for SliderInput {
    /// The dashboard sliders all start at 50.
    fn default() -> Self {
        Self(50)
    }
}

/// One derived value per row in the slice, in row order.
pub fn map_simulation(input: SliderInput, rows: &[FactRow], rng: &mut StreamRng) -> Vec<f64> {
    rows.iter()
        .map(|_| f64::from(input.0) * 10.0 + rng.uniform_int(0, 10) as f64)
        .collect()
}
