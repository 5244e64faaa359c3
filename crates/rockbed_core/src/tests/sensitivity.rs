//! Price substitution against an already matched record

use crate::cost::estimate_cost;
use crate::engine::recompute_sensitivity;
use crate::model::Record;
use crate::payback::{payback_period, ten_year_net};
use crate::savings::estimate_savings;

fn record() -> Record {
    Record::from_dimensions(["Central MN", "Unknown", "7'-6''", "R-5", "Soil", "R-5", "-"])
        .with_energy_kwh("1,000", "1,500")
}

#[test]
fn test_identity_price_reproduces_estimate() {
    let record = record();
    let cost = estimate_cost("7'-6''", "R-5", "R-5");

    for price in [0.05, 0.1, 0.145, 0.2175, 0.5] {
        let original = estimate_savings(&record, price);
        let annual = original.cost_savings;
        let result = recompute_sensitivity(&record, price, cost.total);

        assert_eq!(result.savings, original);
        assert_eq!(
            result.payback,
            payback_period(cost.total, annual.lower, annual.upper)
        );
        assert_eq!(result.ten_year_net, ten_year_net(cost.total, annual));
    }
}

#[test]
fn test_higher_price_shortens_payback() {
    let record = record();
    let cheap = recompute_sensitivity(&record, 0.10, 9000.0);
    let dear = recompute_sensitivity(&record, 0.30, 9000.0);

    assert!(dear.payback.lower < cheap.payback.lower);
    assert!(dear.payback.upper < cheap.payback.upper);
    assert!(dear.ten_year_net.lower > cheap.ten_year_net.lower);
    assert_eq!(dear.savings.energy_kwh, cheap.savings.energy_kwh);
}

#[test]
fn test_zero_price_is_not_applicable() {
    let result = recompute_sensitivity(&record(), 0.0, 9000.0);
    assert!(!result.payback.is_applicable());
    assert_eq!(result.payback.to_string(), "N/A");
    assert_eq!(result.ten_year_net.lower, -9000.0);
}
