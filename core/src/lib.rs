//! esg-core — headless core of the ESG real-estate analytics dashboard.
//!
//! The pipeline is strictly sequential and re-runs in full on every
//! user interaction:
//!
//!   generate → filter → slice → map simulation → chart layout
//!
//! Chart rendering and UI widgets live outside this crate; the frame a
//! pipeline run returns is plain data handed to them.

pub mod charts;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod pipeline;
pub mod rng;
pub mod schema;
pub mod simulation;
pub mod types;
