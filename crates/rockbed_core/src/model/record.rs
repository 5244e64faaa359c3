//! A single row of the simulation lookup table

use serde::{Deserialize, Serialize};

use super::config::Configuration;
use super::dimension::Dimension;

/// One simulation outcome
///
/// The seven dimension fields identify the simulated configuration. Outcome
/// fields are kept as the text found in the table and parsed on demand by
/// [`crate::savings`], so a malformed number never prevents a record from
/// being matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub location: String,
    pub soil_type: String,
    pub rockbed_height: String,
    pub foundation_insulation: String,
    pub insulation_above_rockbed: String,
    pub insulation_below_rockbed: String,
    pub additional_inlet_insulation: String,

    /// Predicted annual energy savings, kWh/yr
    pub energy_kwh_lower: String,
    pub energy_kwh_upper: String,
    /// Predicted annual energy savings, Btu/yr
    pub energy_btu_lower: String,
    pub energy_btu_upper: String,
    /// Predicted savings relative to the baseline, percent
    pub savings_percent_lower: String,
    pub savings_percent_upper: String,
}

impl Record {
    /// Build a record from its seven dimension values in `Dimension::ALL` order
    #[must_use]
    pub fn from_dimensions(values: [&str; Dimension::COUNT]) -> Self {
        let mut record = Self::default();
        for (dim, value) in Dimension::ALL.into_iter().zip(values) {
            *record.value_mut(dim) = value.to_string();
        }
        record
    }

    #[must_use]
    pub fn with_energy_kwh(mut self, lower: &str, upper: &str) -> Self {
        self.energy_kwh_lower = lower.to_string();
        self.energy_kwh_upper = upper.to_string();
        self
    }

    #[must_use]
    pub fn with_energy_btu(mut self, lower: &str, upper: &str) -> Self {
        self.energy_btu_lower = lower.to_string();
        self.energy_btu_upper = upper.to_string();
        self
    }

    #[must_use]
    pub fn with_savings_percent(mut self, lower: &str, upper: &str) -> Self {
        self.savings_percent_lower = lower.to_string();
        self.savings_percent_upper = upper.to_string();
        self
    }

    /// Value of this record on one dimension
    #[must_use]
    pub fn value(&self, dim: Dimension) -> &str {
        match dim {
            Dimension::Location => &self.location,
            Dimension::SoilType => &self.soil_type,
            Dimension::RockbedHeight => &self.rockbed_height,
            Dimension::FoundationInsulation => &self.foundation_insulation,
            Dimension::InsulationAboveRockbed => &self.insulation_above_rockbed,
            Dimension::InsulationBelowRockbed => &self.insulation_below_rockbed,
            Dimension::AdditionalInletInsulation => &self.additional_inlet_insulation,
        }
    }

    pub fn value_mut(&mut self, dim: Dimension) -> &mut String {
        match dim {
            Dimension::Location => &mut self.location,
            Dimension::SoilType => &mut self.soil_type,
            Dimension::RockbedHeight => &mut self.rockbed_height,
            Dimension::FoundationInsulation => &mut self.foundation_insulation,
            Dimension::InsulationAboveRockbed => &mut self.insulation_above_rockbed,
            Dimension::InsulationBelowRockbed => &mut self.insulation_below_rockbed,
            Dimension::AdditionalInletInsulation => &mut self.additional_inlet_insulation,
        }
    }

    /// True when all seven dimension fields are non-empty
    #[must_use]
    pub fn has_all_dimensions(&self) -> bool {
        Dimension::ALL
            .into_iter()
            .all(|dim| !self.value(dim).is_empty())
    }

    /// Exact, case- and whitespace-sensitive comparison on all seven dimensions
    #[must_use]
    pub fn matches(&self, config: &Configuration) -> bool {
        Dimension::ALL
            .into_iter()
            .all(|dim| self.value(dim) == config.get(dim))
    }
}
