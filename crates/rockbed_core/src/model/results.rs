//! Estimate outputs
//!
//! Everything here is derived and recomputed whenever the matched record,
//! cost inputs or electricity price change. Nothing is persisted.

use std::fmt;

use serde::Serialize;

use super::record::Record;

/// A lower/upper pair of estimates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Range {
    pub lower: f64,
    pub upper: f64,
}

impl Range {
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Apply the same function to both bounds independently
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            lower: f(self.lower),
            upper: f(self.upper),
        }
    }
}

/// Construction cost estimate, in dollars
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub materials: f64,
    pub labor: f64,
    pub total: f64,
    /// Total divided by the assumed greenhouse floor area, $/ft²
    pub cost_per_area: f64,
}

impl CostBreakdown {
    /// True for the all-zero breakdown reported when nothing matched
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Annual savings derived from a matched record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsData {
    /// kWh/yr
    pub energy_kwh: Range,
    /// Btu/yr
    pub energy_btu: Range,
    /// Percent improvement over the baseline greenhouse
    pub savings_percent: Range,
    /// $/yr at the electricity price used for the estimate
    pub cost_savings: Range,
}

/// Simple payback period in years
///
/// `lower` comes from the upper savings bound and `upper` from the lower one.
/// A bound is `f64::INFINITY` when the savings that drive it are not positive;
/// such bounds display as `N/A`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaybackPeriod {
    pub lower: f64,
    pub upper: f64,
}

impl PaybackPeriod {
    /// True when both bounds are finite
    #[must_use]
    pub fn is_applicable(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }
}

fn fmt_years(years: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if years.is_finite() {
        write!(f, "{years:.1}")
    } else {
        f.write_str("N/A")
    }
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.lower.is_finite() {
            return f.write_str("N/A");
        }
        fmt_years(self.lower, f)?;
        f.write_str(" - ")?;
        fmt_years(self.upper, f)?;
        if self.upper.is_finite() {
            f.write_str(" years")?;
        }
        Ok(())
    }
}

/// Cumulative net position at the end of a year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelinePoint {
    pub year: u32,
    pub net: Range,
}

/// Payback period together with the derived net positions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaybackSummary {
    pub period: PaybackPeriod,
    pub ten_year_net: Range,
    /// Years 0 through 10
    pub timeline: Vec<TimelinePoint>,
}

impl PaybackSummary {
    /// First year whose pessimistic net position is no longer negative
    #[must_use]
    pub fn break_even_year(&self) -> Option<u32> {
        self.timeline
            .iter()
            .find(|point| point.net.lower >= 0.0)
            .map(|point| point.year)
    }
}

/// Savings and payback under a hypothetical electricity price
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensitivityResult {
    pub price: f64,
    pub savings: SavingsData,
    pub payback: PaybackPeriod,
    pub ten_year_net: Range,
}

/// Outcome of resolving a configuration
///
/// When no record matches, `record` and `savings` are `None` and `cost` is
/// all zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate<'a> {
    pub record: Option<&'a Record>,
    pub cost: CostBreakdown,
    pub savings: Option<SavingsData>,
}

impl Estimate<'_> {
    /// The "no estimate available" sentinel
    #[must_use]
    pub fn empty() -> Self {
        Self {
            record: None,
            cost: CostBreakdown::default(),
            savings: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record.is_none()
    }

    /// Payback, ten-year net and timeline for this estimate's cost and savings
    #[must_use]
    pub fn payback(&self) -> Option<PaybackSummary> {
        self.savings
            .map(|savings| crate::payback::summarize(self.cost.total, savings.cost_savings))
    }
}
