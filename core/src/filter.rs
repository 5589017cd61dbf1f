//! Filter & slice engine.
//!
//! A selection is up to three optional equality selectors. Filtering is
//! the conjunction of the active selectors, preserves row order, and is
//! idempotent. A selector value absent from the table's dimension yields
//! an empty result, never an error — the UI feeds values from the same
//! fixed sets, but nothing here assumes that.

use crate::{
    generator::FactRow,
    types::{Phase, Year},
};
use serde::{Deserialize, Serialize};

/// Request-scoped, immutable filter state. `None` means "All".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Selection {
    pub subsidiary: Option<String>,
    pub asset: Option<String>,
    pub year: Option<Year>,
}

impl Selection {
    /// No constraints — every row passes.
    pub const ALL: Selection = Selection {
        subsidiary: None,
        asset: None,
        year: None,
    };

    pub fn is_unconstrained(&self) -> bool {
        self.subsidiary.is_none() && self.asset.is_none() && self.year.is_none()
    }

    /// Conjunction of all active selectors.
    pub fn matches(&self, row: &FactRow) -> bool {
        if let Some(sub) = &self.subsidiary {
            if &row.subsidiary != sub {
                return false;
            }
        }
        if let Some(asset) = &self.asset {
            if &row.asset != asset {
                return false;
            }
        }
        if let Some(year) = self.year {
            if row.year != year {
                return false;
            }
        }
        true
    }

    /// Order-preserving filter over the fact table.
    pub fn apply(&self, rows: &[FactRow]) -> Vec<FactRow> {
        rows.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// The per-tab phase selector, applied after the user selection.
pub fn slice_phase(rows: &[FactRow], phase: Phase) -> Vec<FactRow> {
    rows.iter().filter(|r| r.phase == phase).cloned().collect()
}
