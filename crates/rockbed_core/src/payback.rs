//! Payback period, ten-year net position and payback timeline

use crate::model::{PaybackPeriod, PaybackSummary, Range, TimelinePoint};

/// Horizon for the net position and the timeline, years
pub const HORIZON_YEARS: u32 = 10;

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn years_to_recover(total_cost: f64, annual_savings: f64) -> f64 {
    if annual_savings > 0.0 {
        round_tenths(total_cost / annual_savings)
    } else {
        f64::INFINITY
    }
}

/// Simple payback range in years, rounded to one decimal place
///
/// The bounds are inverted relative to savings: the shortest payback (`lower`)
/// comes from the largest savings (`savings_upper`), and the longest
/// (`upper`) from the smallest (`savings_lower`). A side whose savings are zero
/// or negative never pays back and is `f64::INFINITY`.
#[must_use]
pub fn payback_period(total_cost: f64, savings_lower: f64, savings_upper: f64) -> PaybackPeriod {
    PaybackPeriod {
        lower: years_to_recover(total_cost, savings_upper),
        upper: years_to_recover(total_cost, savings_lower),
    }
}

/// Net position after ten years of savings, per bound
#[must_use]
pub fn ten_year_net(total_cost: f64, annual_savings: Range) -> Range {
    annual_savings.map(|savings| savings * f64::from(HORIZON_YEARS) - total_cost)
}

/// Cumulative net position for years 0 through 10
///
/// Year 0 is always `-total_cost`.
#[must_use]
pub fn timeline(total_cost: f64, annual_savings: Range) -> Vec<TimelinePoint> {
    (0..=HORIZON_YEARS)
        .map(|year| TimelinePoint {
            year,
            net: annual_savings.map(|savings| savings * f64::from(year) - total_cost),
        })
        .collect()
}

/// Payback period, ten-year net and timeline in one pass
#[must_use]
pub fn summarize(total_cost: f64, annual_savings: Range) -> PaybackSummary {
    PaybackSummary {
        period: payback_period(total_cost, annual_savings.lower, annual_savings.upper),
        ten_year_net: ten_year_net(total_cost, annual_savings),
        timeline: timeline(total_cost, annual_savings),
    }
}
