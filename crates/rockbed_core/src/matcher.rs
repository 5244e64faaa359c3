//! Resolve a complete configuration to its simulation record

use crate::dataset::Dataset;
use crate::model::{Configuration, Record};

/// Find the record simulated for exactly this configuration
///
/// Returns `None` straight away if any of the seven dimensions is unset.
/// Otherwise the first record in table order whose seven values equal the
/// configuration's is returned; the table is expected to hold one row per
/// combination, and if it holds more the earliest one wins. `None` only means
/// no simulation was run for the combination.
#[must_use]
pub fn resolve<'a>(dataset: &'a Dataset, config: &Configuration) -> Option<&'a Record> {
    if !config.is_complete() {
        return None;
    }

    // Positions come back in table order, so the first is the earliest row
    let found = dataset
        .matching_positions(&config.fixed_dimensions())
        .first()
        .and_then(|&position| dataset.get(position));
    if found.is_none() {
        tracing::debug!(?config, "no simulation record for configuration");
    }
    found
}
