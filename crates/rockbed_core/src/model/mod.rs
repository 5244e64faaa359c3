mod config;
mod dimension;
mod options;
mod record;
mod results;

pub use config::{Configuration, DEFAULT_ELECTRICITY_PRICE, InsulationConfig, SiteConfig};
pub use dimension::Dimension;
pub use options::{FilteredOptions, FixedDimensions};
pub use record::Record;
pub use results::{
    CostBreakdown, Estimate, PaybackPeriod, PaybackSummary, Range, SavingsData,
    SensitivityResult, TimelinePoint,
};
