//! Cascading option filtering
//!
//! Given the dimensions a caller has already fixed, report which values each
//! dimension can still take. Filtering is a set intersection over the
//! dataset's per-dimension index, so the order dimensions were fixed in never
//! changes the result.

use std::collections::BTreeSet;

use crate::dataset::Dataset;
use crate::model::{Dimension, FilteredOptions, FixedDimensions};

/// Values reachable on every dimension given all fixed dimensions
///
/// A fixed dimension's own list contains its fixed value whenever any record
/// survives the filter. When nothing survives every list is empty. With no
/// fixed dimensions this is the global set of values per dimension.
#[must_use]
pub fn options_for(dataset: &Dataset, fixed: &FixedDimensions) -> FilteredOptions {
    if fixed.is_empty() {
        return global_options(dataset);
    }
    let positions = dataset.matching_positions(fixed);
    collect_options(dataset, &positions)
}

/// Values each dimension could switch to, holding every other fixed dimension
///
/// Unlike [`options_for`], a dimension's own fixed value is ignored when
/// computing that dimension's list.
#[must_use]
pub fn alternatives_for(dataset: &Dataset, fixed: &FixedDimensions) -> FilteredOptions {
    let mut options = FilteredOptions::default();
    for dim in Dimension::ALL {
        let positions = dataset.matching_positions(&fixed.without(dim));
        *options.get_mut(dim) = distinct_at(dataset, dim, &positions);
    }
    options
}

fn global_options(dataset: &Dataset) -> FilteredOptions {
    let mut options = FilteredOptions::default();
    for dim in Dimension::ALL {
        *options.get_mut(dim) = dataset.distinct_values(dim);
    }
    options
}

fn collect_options(dataset: &Dataset, positions: &[usize]) -> FilteredOptions {
    let mut options = FilteredOptions::default();
    for dim in Dimension::ALL {
        *options.get_mut(dim) = distinct_at(dataset, dim, positions);
    }
    options
}

fn distinct_at(dataset: &Dataset, dim: Dimension, positions: &[usize]) -> Vec<String> {
    let values: BTreeSet<&str> = positions
        .iter()
        .filter_map(|&position| dataset.get(position))
        .map(|record| record.value(dim))
        .collect();
    values.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Record::from_dimensions(["North", "Clay", "7'-6''", "R-5", "Soil", "R-5", "-"]),
            Record::from_dimensions(["North", "Sand", "9'-0''", "R-10", "Soil", "R-5", "-"]),
            Record::from_dimensions(["South", "Clay", "3'-9''", "R-5", "Gravel", "None", "R-2"]),
            Record::from_dimensions(["South", "Clay", "7'-6''", "R-20", "Soil", "None", "-"]),
        ])
    }

    #[test]
    fn test_no_fixed_returns_global_sets() {
        let options = options_for(&sample(), &FixedDimensions::new());
        assert_eq!(options.locations, vec!["North", "South"]);
        assert_eq!(options.soil_types, vec!["Clay", "Sand"]);
        assert_eq!(options.rockbed_heights, vec!["3'-9''", "7'-6''", "9'-0''"]);
        assert_eq!(options.foundation_insulations, vec!["R-10", "R-20", "R-5"]);
        assert_eq!(options.additional_inlet_insulation, vec!["-", "R-2"]);
    }

    #[test]
    fn test_cascading_narrows_open_dimensions() {
        let fixed = FixedDimensions::new().with(Dimension::Location, "South");
        let options = options_for(&sample(), &fixed);

        assert_eq!(options.locations, vec!["South"]);
        assert_eq!(options.soil_types, vec!["Clay"]);
        assert_eq!(options.rockbed_heights, vec!["3'-9''", "7'-6''"]);
        assert_eq!(options.insulation_below_rockbed, vec!["None"]);
    }

    #[test]
    fn test_unmatched_combination_empties_everything() {
        let fixed = FixedDimensions::new()
            .with(Dimension::Location, "North")
            .with(Dimension::InsulationAboveRockbed, "Gravel");
        let options = options_for(&sample(), &fixed);
        assert!(options.is_empty());
    }

    #[test]
    fn test_alternatives_ignore_own_fix() {
        let fixed = FixedDimensions::new()
            .with(Dimension::Location, "North")
            .with(Dimension::SoilType, "Clay");
        let alternatives = alternatives_for(&sample(), &fixed);

        // Location may switch to any location that has Clay soil
        assert_eq!(alternatives.locations, vec!["North", "South"]);
        // Soil may switch to anything found in the North
        assert_eq!(alternatives.soil_types, vec!["Clay", "Sand"]);
        // Open dimensions see both fixes
        assert_eq!(alternatives.rockbed_heights, vec!["7'-6''"]);
    }

    #[test]
    fn test_empty_dataset_yields_empty_options() {
        let dataset = Dataset::new(Vec::new());
        assert!(options_for(&dataset, &FixedDimensions::new()).is_empty());
        let fixed = FixedDimensions::new().with(Dimension::Location, "North");
        assert!(options_for(&dataset, &fixed).is_empty());
        assert!(alternatives_for(&dataset, &fixed).is_empty());
    }
}
