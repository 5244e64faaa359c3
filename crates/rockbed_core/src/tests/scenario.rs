//! End-to-end: configuration in, estimate out

use crate::dataset::Dataset;
use crate::engine::Engine;
use crate::model::{Configuration, Dimension, Record};

const CENTRAL_MN: [&str; 7] = [
    "Central MN",
    "Unknown",
    "7'-6''",
    "R-5 foundation",
    "soil above",
    "R-5 below",
    "-",
];

fn engine() -> Engine {
    Engine::new(Dataset::new(vec![
        Record::from_dimensions([
            "Northern MN",
            "Clay",
            "9'-0''",
            "R-10 foundation",
            "soil above",
            "None",
            "R-2",
        ])
        .with_energy_kwh("2,000", "3,000"),
        Record::from_dimensions(CENTRAL_MN)
            .with_energy_kwh("1,000", "1,500")
            .with_energy_btu("3,412,142", "5,118,213")
            .with_savings_percent("10.2", "15.3"),
    ]))
}

fn central_mn() -> Configuration {
    Configuration::from_dimensions(CENTRAL_MN).with_electricity_price(0.145)
}

#[test]
fn test_central_mn_estimate() {
    let engine = engine();
    let estimate = engine.resolve_and_estimate(&central_mn());

    assert!(!estimate.is_empty());
    let savings = estimate.savings.expect("matched configuration has savings");
    assert!((savings.cost_savings.lower - 145.0).abs() < 1e-9);
    assert!((savings.cost_savings.upper - 217.5).abs() < 1e-9);
    assert_eq!(savings.savings_percent.lower, 10.2);

    // 7'-6'' with R-5 foundation and R-5 below the rockbed
    assert_eq!(estimate.cost.total, 9000.0);

    let summary = estimate.payback().expect("payback for matched estimate");
    assert_eq!(summary.period.lower, 41.4);
    assert_eq!(summary.period.upper, 62.1);
    assert_eq!(summary.timeline[0].net.lower, -9000.0);
    assert_eq!(summary.break_even_year(), None);
}

#[test]
fn test_any_unrepresented_dimension_gives_sentinel() {
    let engine = engine();
    for dim in Dimension::ALL {
        let config = central_mn().with(dim, "not simulated");
        let estimate = engine.resolve_and_estimate(&config);

        assert!(estimate.is_empty(), "{dim} change should not match");
        assert!(estimate.cost.is_zero());
        assert!(estimate.savings.is_none());
        assert!(estimate.payback().is_none());
    }
}

#[test]
fn test_incomplete_configuration_gives_sentinel() {
    let engine = engine();
    let mut config = central_mn();
    config.clear(Dimension::AdditionalInletInsulation);
    assert!(engine.resolve_and_estimate(&config).is_empty());
}

#[test]
fn test_options_cascade_toward_the_match() {
    let engine = engine();
    let config = Configuration::default().with(Dimension::Location, "Central MN");

    let options = engine.options(&config);
    assert_eq!(options.soil_types, vec!["Unknown"]);
    assert_eq!(options.rockbed_heights, vec!["7'-6''"]);

    let alternatives = engine.alternatives(&config);
    assert_eq!(alternatives.locations, vec!["Central MN", "Northern MN"]);
}

#[test]
fn test_suggested_configuration_resolves() {
    let engine = engine();
    let global = engine.options(&Configuration::default());
    let config = Configuration::suggested(&global);

    assert_eq!(config, central_mn());
    assert!(!engine.resolve_and_estimate(&config).is_empty());
}

#[test]
fn test_empty_dataset_degrades() {
    let engine = Engine::new(Dataset::new(Vec::new()));
    assert!(engine.options(&Configuration::default()).is_empty());
    assert!(engine.options(&central_mn()).is_empty());
    assert!(engine.resolve_and_estimate(&central_mn()).is_empty());
    assert_eq!(
        Configuration::suggested(&engine.options(&Configuration::default())),
        Configuration::default()
    );
}
