//! Construction cost model
//!
//! Costs depend only on the rockbed height and two insulation labels, never on
//! the simulation table. Unknown labels fall back to the neutral multiplier and
//! no insulation add-on.

use crate::model::CostBreakdown;

/// Materials cost for a 7'-6'' rockbed with no insulation, $
pub const BASE_MATERIALS_COST: f64 = 5000.0;
/// Labor cost for a 7'-6'' rockbed, $
pub const BASE_LABOR_COST: f64 = 3000.0;
/// Greenhouse floor area used for the per-area figure, ft²
pub const ASSUMED_FLOOR_AREA: f64 = 1000.0;

/// Foundation insulation add-ons, checked in this order by substring
const FOUNDATION_TIERS: [(&str, f64); 3] = [("R-10", 800.0), ("R-20", 1200.0), ("R-5", 400.0)];

/// Below-rockbed insulation add-on
const BELOW_ROCKBED_TIER: (&str, f64) = ("R-5", 600.0);

/// Scale factor applied to base materials and labor for a rockbed height label
#[must_use]
pub fn height_multiplier(rockbed_height: &str) -> f64 {
    match rockbed_height {
        "3'-9''" | "6'-0''" => 0.8,
        "7'-6''" => 1.0,
        "9'-0''" => 1.3,
        _ => 1.0,
    }
}

/// Dollar add-on for the foundation and below-rockbed insulation choices
///
/// Foundation tiers are tested by substring in priority order R-10, R-20,
/// R-5; a label containing more than one tier prices at the first one found.
#[must_use]
pub fn insulation_add_on(foundation_insulation: &str, below_rockbed_insulation: &str) -> f64 {
    let foundation = FOUNDATION_TIERS
        .iter()
        .find(|(tier, _)| foundation_insulation.contains(*tier))
        .map_or(0.0, |(_, cost)| *cost);

    let (below_tier, below_cost) = BELOW_ROCKBED_TIER;
    let below = if below_rockbed_insulation.contains(below_tier) {
        below_cost
    } else {
        0.0
    };

    foundation + below
}

/// Estimate the construction cost of a rockbed
#[must_use]
pub fn estimate_cost(
    rockbed_height: &str,
    foundation_insulation: &str,
    below_rockbed_insulation: &str,
) -> CostBreakdown {
    let multiplier = height_multiplier(rockbed_height);
    let add_on = insulation_add_on(foundation_insulation, below_rockbed_insulation);

    let materials = BASE_MATERIALS_COST * multiplier + add_on;
    let labor = BASE_LABOR_COST * multiplier;
    let total = materials + labor;

    CostBreakdown {
        materials,
        labor,
        total,
        cost_per_area: total / ASSUMED_FLOOR_AREA,
    }
}
