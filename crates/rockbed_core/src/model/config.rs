//! Caller-held site and insulation selections
//!
//! A `Configuration` is owned by the caller and passed by reference into the
//! engine after every change. An empty string means the dimension is unset;
//! there are no wildcard values.

use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::options::{FilteredOptions, FixedDimensions};

/// Electricity price used when none is given, $/kWh
pub const DEFAULT_ELECTRICITY_PRICE: f64 = 0.145;

/// Where the greenhouse is built and how deep the rockbed goes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub location: String,
    pub soil_type: String,
    pub rockbed_height: String,
}

/// Insulation choices plus the electricity price used to value savings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsulationConfig {
    pub foundation_insulation: String,
    pub insulation_above_rockbed: String,
    pub insulation_below_rockbed: String,
    pub additional_inlet_insulation: String,
    /// $/kWh
    pub electricity_price: f64,
}

impl Default for InsulationConfig {
    fn default() -> Self {
        Self {
            foundation_insulation: String::new(),
            insulation_above_rockbed: String::new(),
            insulation_below_rockbed: String::new(),
            additional_inlet_insulation: String::new(),
            electricity_price: DEFAULT_ELECTRICITY_PRICE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub site: SiteConfig,
    pub insulation: InsulationConfig,
}

impl Configuration {
    /// Build a fully specified configuration from values in `Dimension::ALL` order
    #[must_use]
    pub fn from_dimensions(values: [&str; Dimension::COUNT]) -> Self {
        let mut config = Self::default();
        for (dim, value) in Dimension::ALL.into_iter().zip(values) {
            config.set(dim, value);
        }
        config
    }

    /// Raw value of a dimension; empty when unset
    #[must_use]
    pub fn get(&self, dim: Dimension) -> &str {
        match dim {
            Dimension::Location => &self.site.location,
            Dimension::SoilType => &self.site.soil_type,
            Dimension::RockbedHeight => &self.site.rockbed_height,
            Dimension::FoundationInsulation => &self.insulation.foundation_insulation,
            Dimension::InsulationAboveRockbed => &self.insulation.insulation_above_rockbed,
            Dimension::InsulationBelowRockbed => &self.insulation.insulation_below_rockbed,
            Dimension::AdditionalInletInsulation => &self.insulation.additional_inlet_insulation,
        }
    }

    /// Value of a dimension, or `None` when unset
    #[must_use]
    pub fn value(&self, dim: Dimension) -> Option<&str> {
        Some(self.get(dim)).filter(|v| !v.is_empty())
    }

    fn field_mut(&mut self, dim: Dimension) -> &mut String {
        match dim {
            Dimension::Location => &mut self.site.location,
            Dimension::SoilType => &mut self.site.soil_type,
            Dimension::RockbedHeight => &mut self.site.rockbed_height,
            Dimension::FoundationInsulation => &mut self.insulation.foundation_insulation,
            Dimension::InsulationAboveRockbed => &mut self.insulation.insulation_above_rockbed,
            Dimension::InsulationBelowRockbed => &mut self.insulation.insulation_below_rockbed,
            Dimension::AdditionalInletInsulation => {
                &mut self.insulation.additional_inlet_insulation
            }
        }
    }

    pub fn set(&mut self, dim: Dimension, value: impl Into<String>) {
        *self.field_mut(dim) = value.into();
    }

    #[must_use]
    pub fn with(mut self, dim: Dimension, value: impl Into<String>) -> Self {
        self.set(dim, value);
        self
    }

    pub fn clear(&mut self, dim: Dimension) {
        self.field_mut(dim).clear();
    }

    #[must_use]
    pub fn with_electricity_price(mut self, price: f64) -> Self {
        self.insulation.electricity_price = price;
        self
    }

    #[must_use]
    pub fn electricity_price(&self) -> f64 {
        self.insulation.electricity_price
    }

    /// True when all seven dimensions are set
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Dimension::ALL
            .into_iter()
            .all(|dim| self.value(dim).is_some())
    }

    /// Dimensions that are currently set, as filter input
    #[must_use]
    pub fn fixed_dimensions(&self) -> FixedDimensions {
        Dimension::ALL
            .into_iter()
            .filter_map(|dim| self.value(dim).map(|v| (dim, v)))
            .collect()
    }

    /// Starting selections for a freshly loaded dataset
    ///
    /// Picks, per dimension, the first option matching a preferred pattern
    /// (central Minnesota, unknown soil, a 7'-6'' rockbed, R-5 foundation and
    /// below-rockbed insulation, soil above the rockbed, no extra inlet
    /// insulation) and falls back to the first option available. Dimensions
    /// with no options stay unset.
    #[must_use]
    pub fn suggested(options: &FilteredOptions) -> Self {
        let mut config = Self::default();
        for dim in Dimension::ALL {
            let values = options.get(dim);
            let preferred = values.iter().find(|v| is_preferred(dim, v));
            if let Some(value) = preferred.or_else(|| values.first()) {
                config.set(dim, value.as_str());
            }
        }
        config
    }
}

fn is_preferred(dim: Dimension, value: &str) -> bool {
    let lower = value.to_lowercase();
    match dim {
        Dimension::Location => lower.contains("central") || lower.contains("minnesota"),
        Dimension::SoilType => lower.contains("unknown"),
        Dimension::RockbedHeight => value.contains("7'-6"),
        Dimension::FoundationInsulation | Dimension::InsulationBelowRockbed => {
            value.contains("R-5")
        }
        Dimension::InsulationAboveRockbed => lower.contains("soil"),
        Dimension::AdditionalInletInsulation => value == "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_with_default_price() {
        let config = Configuration::default();
        assert!(!config.is_complete());
        assert!(config.fixed_dimensions().is_empty());
        assert_eq!(config.electricity_price(), DEFAULT_ELECTRICITY_PRICE);
    }

    #[test]
    fn test_set_and_clear_route_to_the_right_half() {
        let mut config = Configuration::default();
        config.set(Dimension::RockbedHeight, "7'-6''");
        config.set(Dimension::InsulationBelowRockbed, "R-5");
        assert_eq!(config.site.rockbed_height, "7'-6''");
        assert_eq!(config.insulation.insulation_below_rockbed, "R-5");

        config.clear(Dimension::RockbedHeight);
        assert_eq!(config.value(Dimension::RockbedHeight), None);
        assert_eq!(config.fixed_dimensions().len(), 1);
    }

    #[test]
    fn test_is_complete() {
        let config = Configuration::from_dimensions(["a", "b", "c", "d", "e", "f", "g"]);
        assert!(config.is_complete());
        assert!(!config.with(Dimension::SoilType, "").is_complete());
    }

    #[test]
    fn test_suggested_prefers_patterns_then_first() {
        let mut options = FilteredOptions::default();
        options.locations = vec!["Northern MN".into(), "South Central MN".into()];
        options.soil_types = vec!["Clay".into(), "Unknown".into()];
        options.rockbed_heights = vec!["3'-9''".into(), "7'-6''".into()];
        options.foundation_insulations = vec!["None".into(), "R-5 XPS".into()];
        options.insulation_above_rockbed = vec!["Gravel".into()];
        options.insulation_below_rockbed = vec!["R-10".into(), "R-5".into()];
        options.additional_inlet_insulation = vec!["-".into(), "R-2".into()];

        let config = Configuration::suggested(&options);
        assert_eq!(config.site.location, "South Central MN");
        assert_eq!(config.site.soil_type, "Unknown");
        assert_eq!(config.site.rockbed_height, "7'-6''");
        assert_eq!(config.insulation.foundation_insulation, "R-5 XPS");
        assert_eq!(config.insulation.insulation_above_rockbed, "Gravel");
        assert_eq!(config.insulation.insulation_below_rockbed, "R-5");
        assert_eq!(config.insulation.additional_inlet_insulation, "-");
        assert_eq!(config.electricity_price(), DEFAULT_ELECTRICITY_PRICE);
    }

    #[test]
    fn test_suggested_from_empty_options_stays_unset() {
        let config = Configuration::suggested(&FilteredOptions::default());
        assert_eq!(config, Configuration::default());
    }
}
