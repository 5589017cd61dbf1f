//! Shared primitive types used across the entire dashboard core.

use serde::{Deserialize, Serialize};

/// A reporting year. The fact table covers a fixed contiguous range.
pub type Year = i32;

/// Lifecycle stage of a real-estate asset.
/// Variants are fixed — the dashboard tabs are built around them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Building,
    Construction,
    PostConstruction,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Building, Phase::Construction, Phase::PostConstruction];

    /// Human-readable label, as shown on the dashboard tabs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Building => "Building",
            Self::Construction => "Construction",
            Self::PostConstruction => "Post-Construction",
        }
    }
}
