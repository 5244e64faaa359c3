//! Entry points for the presentation layer
//!
//! [`Engine`] owns the dataset and answers the two questions asked after every
//! configuration change: which options remain, and what the estimate is once
//! all seven dimensions are set. Sensitivity analysis works from an already
//! matched record and never touches the dataset.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cost::estimate_cost;
use crate::dataset::Dataset;
use crate::filter::{alternatives_for, options_for};
use crate::matcher::resolve;
use crate::model::{Configuration, Estimate, FilteredOptions, Record, SensitivityResult};
use crate::payback::{payback_period, ten_year_net};
use crate::savings::estimate_savings;

/// Read-only view over a loaded dataset
#[derive(Debug, Clone, Default)]
pub struct Engine {
    dataset: Dataset,
}

impl Engine {
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Options still reachable given every dimension set in `config`
    #[must_use]
    pub fn options(&self, config: &Configuration) -> FilteredOptions {
        options_for(&self.dataset, &config.fixed_dimensions())
    }

    /// Options each dimension could switch to, holding the others
    #[must_use]
    pub fn alternatives(&self, config: &Configuration) -> FilteredOptions {
        alternatives_for(&self.dataset, &config.fixed_dimensions())
    }

    #[must_use]
    pub fn resolve(&self, config: &Configuration) -> Option<&Record> {
        resolve(&self.dataset, config)
    }

    /// Match the configuration and derive cost and savings
    ///
    /// Returns [`Estimate::empty`] when no record matches, including when the
    /// configuration is incomplete.
    #[must_use]
    pub fn resolve_and_estimate(&self, config: &Configuration) -> Estimate<'_> {
        let Some(record) = self.resolve(config) else {
            return Estimate::empty();
        };

        let cost = estimate_cost(
            &config.site.rockbed_height,
            &config.insulation.foundation_insulation,
            &config.insulation.insulation_below_rockbed,
        );
        let savings = estimate_savings(record, config.electricity_price());

        Estimate {
            record: Some(record),
            cost,
            savings: Some(savings),
        }
    }
}

/// Savings, payback and ten-year net for a matched record at another price
///
/// Evaluating at the price the estimate was made with reproduces that
/// estimate's figures exactly.
#[must_use]
pub fn recompute_sensitivity(
    record: &Record,
    hypothetical_price: f64,
    total_cost: f64,
) -> SensitivityResult {
    let savings = estimate_savings(record, hypothetical_price);
    let annual = savings.cost_savings;

    SensitivityResult {
        price: hypothetical_price,
        savings,
        payback: payback_period(total_cost, annual.lower, annual.upper),
        ten_year_net: ten_year_net(total_cost, annual),
    }
}

/// Largest number of prices a single sweep will evaluate
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Grid of electricity prices for a sweep, $/kWh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSweep {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for PriceSweep {
    /// $0.05 to $0.50 in half-cent steps
    fn default() -> Self {
        Self {
            min: 0.05,
            max: 0.50,
            step: 0.005,
        }
    }
}

impl PriceSweep {
    /// Prices from `min` to `max` inclusive, ascending
    ///
    /// Empty when the step is not positive, the bounds are inverted or not
    /// finite, or the grid would exceed [`MAX_SWEEP_POINTS`].
    #[must_use]
    pub fn prices(&self) -> Vec<f64> {
        let Some(steps) = self.steps() else {
            return Vec::new();
        };
        (0..=steps)
            .map(|i| self.min + self.step * i as f64)
            .collect()
    }

    /// Number of steps after `min`, or `None` if the grid is invalid or too large
    fn steps(&self) -> Option<usize> {
        let valid = self.step > 0.0
            && self.min.is_finite()
            && self.max.is_finite()
            && self.step.is_finite()
            && self.min <= self.max;
        if !valid {
            return None;
        }

        // Tolerance keeps `max` in the grid despite float drift in the division
        let steps = ((self.max - self.min) / self.step + 1e-9).floor();
        if !steps.is_finite() || steps >= MAX_SWEEP_POINTS as f64 {
            return None;
        }
        Some(steps as usize)
    }

    /// Number of prices [`PriceSweep::prices`] yields, zero for an unusable grid
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps().map_or(0, |steps| steps + 1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sensitivity results across a price grid, in ascending price order
#[must_use]
pub fn sweep_prices(record: &Record, total_cost: f64, sweep: &PriceSweep) -> Vec<SensitivityResult> {
    let prices = sweep.prices();

    #[cfg(feature = "parallel")]
    let results: Vec<SensitivityResult> = prices
        .par_iter()
        .map(|&price| recompute_sensitivity(record, price, total_cost))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<SensitivityResult> = prices
        .iter()
        .map(|&price| recompute_sensitivity(record, price, total_cost))
        .collect();

    results
}
