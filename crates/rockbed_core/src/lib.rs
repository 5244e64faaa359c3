//! Configuration resolution engine for the deep winter greenhouse rockbed calculator
//!
//! This crate turns a precomputed simulation lookup table into construction
//! estimates. It supports:
//! - Cascading option filtering across the seven site/insulation dimensions
//! - Exact resolution of a complete configuration to a single simulation record
//! - A deterministic construction cost model
//! - Energy and cost savings ranges derived from the matched record
//! - Payback periods, ten-year net position and a year-by-year timeline
//! - Electricity price sensitivity analysis without re-querying the dataset
//!
//! # Example
//!
//! ```ignore
//! use rockbed_core::{Configuration, Dataset, Engine};
//!
//! let engine = Engine::new(Dataset::new(records));
//! let options = engine.options(&Configuration::default());
//! let config = Configuration::suggested(&options);
//!
//! let estimate = engine.resolve_and_estimate(&config);
//! if let Some(summary) = estimate.payback() {
//!     println!("payback: {}", summary.period);
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod cost;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod payback;
pub mod savings;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use dataset::Dataset;
pub use engine::{Engine, MAX_SWEEP_POINTS, PriceSweep, recompute_sensitivity, sweep_prices};
pub use error::ParseDimensionError;
pub use model::{
    Configuration, CostBreakdown, Dimension, Estimate, FilteredOptions, FixedDimensions,
    InsulationConfig, PaybackPeriod, PaybackSummary, Range, Record, SavingsData,
    SensitivityResult, SiteConfig, TimelinePoint,
};
