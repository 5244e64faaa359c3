//! Matcher uniqueness over a generated table

use super::{full_factorial, sparse_dataset};
use crate::dataset::Dataset;
use crate::matcher::resolve;
use crate::model::{Configuration, Dimension, Record};

fn config_of(record: &Record) -> Configuration {
    let mut config = Configuration::default();
    for dim in Dimension::ALL {
        config.set(dim, record.value(dim));
    }
    config
}

#[test]
fn test_every_record_resolves_to_itself() {
    let dataset = sparse_dataset();
    for record in dataset.records() {
        let config = config_of(record);
        let found = resolve(&dataset, &config);
        assert_eq!(found, Some(record));
    }
}

#[test]
fn test_resolved_record_equals_configuration() {
    let dataset = sparse_dataset();
    for record in full_factorial() {
        let config = config_of(&record);
        if let Some(found) = resolve(&dataset, &config) {
            for dim in Dimension::ALL {
                assert_eq!(found.value(dim), config.get(dim));
            }
        }
    }
}

#[test]
fn test_missing_combinations_do_not_resolve() {
    let dataset = sparse_dataset();
    let present = dataset.len();
    let missing = full_factorial()
        .into_iter()
        .filter(|record| resolve(&dataset, &config_of(record)).is_none())
        .count();
    assert_eq!(present + missing, full_factorial().len());
}

#[test]
fn test_duplicates_resolve_to_earliest_row() {
    let mut records = full_factorial();
    let original = records[3].clone();
    let mut duplicate = original.clone();
    duplicate.energy_kwh_lower = "duplicate".to_string();
    records.push(duplicate);
    let dataset = Dataset::new(records);

    let found = resolve(&dataset, &config_of(&original));
    assert_eq!(found, Some(&original));
    assert_eq!(found, Some(&dataset.records()[3]));
}
