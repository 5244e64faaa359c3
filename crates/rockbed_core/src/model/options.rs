//! Filter input and output types

use std::collections::BTreeMap;

use serde::Serialize;

use super::dimension::Dimension;

/// Dimensions fixed to a specific value, keyed by dimension
///
/// Inserting an empty value leaves the dimension unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedDimensions {
    values: BTreeMap<Dimension, String>,
}

impl FixedDimensions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, dim: Dimension, value: impl Into<String>) -> Self {
        self.insert(dim, value);
        self
    }

    pub fn insert(&mut self, dim: Dimension, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&dim);
        } else {
            self.values.insert(dim, value);
        }
    }

    pub fn remove(&mut self, dim: Dimension) -> Option<String> {
        self.values.remove(&dim)
    }

    #[must_use]
    pub fn get(&self, dim: Dimension) -> Option<&str> {
        self.values.get(&dim).map(String::as_str)
    }

    /// Copy of this set with one dimension released
    #[must_use]
    pub fn without(&self, dim: Dimension) -> Self {
        let mut copy = self.clone();
        copy.remove(dim);
        copy
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &str)> {
        self.values.iter().map(|(dim, v)| (*dim, v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(Dimension, S)> for FixedDimensions {
    fn from_iter<I: IntoIterator<Item = (Dimension, S)>>(iter: I) -> Self {
        let mut fixed = Self::new();
        for (dim, value) in iter {
            fixed.insert(dim, value);
        }
        fixed
    }
}

/// Reachable values per dimension, each sorted ascending without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilteredOptions {
    pub locations: Vec<String>,
    pub soil_types: Vec<String>,
    pub rockbed_heights: Vec<String>,
    pub foundation_insulations: Vec<String>,
    pub insulation_above_rockbed: Vec<String>,
    pub insulation_below_rockbed: Vec<String>,
    pub additional_inlet_insulation: Vec<String>,
}

impl FilteredOptions {
    #[must_use]
    pub fn get(&self, dim: Dimension) -> &[String] {
        match dim {
            Dimension::Location => &self.locations,
            Dimension::SoilType => &self.soil_types,
            Dimension::RockbedHeight => &self.rockbed_heights,
            Dimension::FoundationInsulation => &self.foundation_insulations,
            Dimension::InsulationAboveRockbed => &self.insulation_above_rockbed,
            Dimension::InsulationBelowRockbed => &self.insulation_below_rockbed,
            Dimension::AdditionalInletInsulation => &self.additional_inlet_insulation,
        }
    }

    pub fn get_mut(&mut self, dim: Dimension) -> &mut Vec<String> {
        match dim {
            Dimension::Location => &mut self.locations,
            Dimension::SoilType => &mut self.soil_types,
            Dimension::RockbedHeight => &mut self.rockbed_heights,
            Dimension::FoundationInsulation => &mut self.foundation_insulations,
            Dimension::InsulationAboveRockbed => &mut self.insulation_above_rockbed,
            Dimension::InsulationBelowRockbed => &mut self.insulation_below_rockbed,
            Dimension::AdditionalInletInsulation => &mut self.additional_inlet_insulation,
        }
    }

    #[must_use]
    pub fn contains(&self, dim: Dimension, value: &str) -> bool {
        self.get(dim).binary_search_by(|v| v.as_str().cmp(value)).is_ok()
    }

    /// True when every dimension has no reachable value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Dimension::ALL.into_iter().all(|dim| self.get(dim).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_means_unset() {
        let fixed = FixedDimensions::new()
            .with(Dimension::Location, "Central MN")
            .with(Dimension::SoilType, "");
        assert_eq!(fixed.len(), 1);
        assert_eq!(fixed.get(Dimension::SoilType), None);

        let cleared = fixed.with(Dimension::Location, "");
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_without_leaves_original_untouched() {
        let fixed = FixedDimensions::new()
            .with(Dimension::Location, "Central MN")
            .with(Dimension::RockbedHeight, "7'-6''");
        let released = fixed.without(Dimension::Location);

        assert_eq!(released.len(), 1);
        assert_eq!(fixed.get(Dimension::Location), Some("Central MN"));
    }

    #[test]
    fn test_options_contains() {
        let options = FilteredOptions {
            soil_types: vec!["Clay".into(), "Sand".into()],
            ..Default::default()
        };
        assert!(options.contains(Dimension::SoilType, "Sand"));
        assert!(!options.contains(Dimension::SoilType, "Loam"));
        assert!(!options.is_empty());
        assert!(FilteredOptions::default().is_empty());
    }
}
