//! Scenario tests for the resolution engine
//!
//! Tests are organized by topic:
//! - `filtering` - Cascading filter properties against a full-table scan
//! - `matching` - Matcher uniqueness and exactness over generated tables
//! - `scenario` - End-to-end configuration to estimate
//! - `sensitivity` - Price substitution without re-matching

mod matching;
mod scenario;
mod sensitivity;

use crate::dataset::Dataset;
use crate::model::{Dimension, Record};

/// Values used per dimension when generating a table
const AXES: [&[&str]; Dimension::COUNT] = [
    &["Central MN", "Northern MN", "Southern MN"],
    &["Clay", "Sand", "Unknown"],
    &["3'-9''", "6'-0''", "7'-6''", "9'-0''"],
    &["None", "R-10", "R-5"],
    &["Gravel", "Soil"],
    &["None", "R-5"],
    &["-", "R-2"],
];

/// Every combination of `AXES`, in row-major order
fn full_factorial() -> Vec<Record> {
    let mut rows: Vec<Vec<&str>> = vec![Vec::new()];
    for values in AXES {
        rows = rows
            .into_iter()
            .flat_map(|prefix| {
                values.iter().map(move |value| {
                    let mut row = prefix.clone();
                    row.push(*value);
                    row
                })
            })
            .collect();
    }

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let mut record = Record::default();
            for (dim, value) in Dimension::ALL.into_iter().zip(row) {
                *record.value_mut(dim) = value.to_string();
            }
            let kwh = 500 + i;
            record.with_energy_kwh(&kwh.to_string(), &(kwh * 2).to_string())
        })
        .collect()
}

/// A generated table with every other combination removed, so some
/// selections cascade into empty sets
fn sparse_dataset() -> Dataset {
    full_factorial()
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 0 || i % 7 == 0)
        .map(|(_, record)| record)
        .collect()
}
