//! The seven categorical axes of a simulation record

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseDimensionError;

/// One categorical configuration axis
///
/// Variants are declared in the order the lookup table lists its columns;
/// `Dimension::ALL` and `index()` follow that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Location,
    SoilType,
    RockbedHeight,
    FoundationInsulation,
    InsulationAboveRockbed,
    InsulationBelowRockbed,
    AdditionalInletInsulation,
}

impl Dimension {
    pub const COUNT: usize = 7;

    pub const ALL: [Dimension; Self::COUNT] = [
        Dimension::Location,
        Dimension::SoilType,
        Dimension::RockbedHeight,
        Dimension::FoundationInsulation,
        Dimension::InsulationAboveRockbed,
        Dimension::InsulationBelowRockbed,
        Dimension::AdditionalInletInsulation,
    ];

    /// Position of this dimension in `Dimension::ALL`
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column header used by the simulation lookup table
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::SoilType => "Soil Type",
            Self::RockbedHeight => "Rockbed height",
            Self::FoundationInsulation => "Foundation insulation",
            Self::InsulationAboveRockbed => "Insulation above rockbed",
            Self::InsulationBelowRockbed => "Insulation below rockbed",
            Self::AdditionalInletInsulation => "Additional inlet insulation",
        }
    }

    /// Short kebab-case name, used on the command line
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::SoilType => "soil-type",
            Self::RockbedHeight => "rockbed-height",
            Self::FoundationInsulation => "foundation-insulation",
            Self::InsulationAboveRockbed => "above-rockbed",
            Self::InsulationBelowRockbed => "below-rockbed",
            Self::AdditionalInletInsulation => "inlet-insulation",
        }
    }

    /// Whether this axis belongs to the site half of a configuration
    #[must_use]
    pub fn is_site(self) -> bool {
        matches!(self, Self::Location | Self::SoilType | Self::RockbedHeight)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for Dimension {
    type Err = ParseDimensionError;

    /// Accepts the kebab-case name, the snake_case name or the column header,
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|dim| {
                needle.eq_ignore_ascii_case(dim.name())
                    || needle.eq_ignore_ascii_case(&dim.name().replace('-', "_"))
                    || needle.eq_ignore_ascii_case(dim.header())
            })
            .ok_or_else(|| ParseDimensionError {
                input: s.to_string(),
            })
    }
}
