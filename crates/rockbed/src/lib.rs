//! Rockbed retrofit estimator front end
//!
//! Loads the simulation lookup table from CSV, keeps user settings in a data
//! directory and renders engine results as text or JSON for the `rockbed`
//! command-line tool. The calculations themselves live in `rockbed_core`.

// ============================================================================
// Application modules
// ============================================================================

pub mod app;
pub mod loader;
pub mod logging;
pub mod report;
pub mod settings;
pub mod util;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::{App, Selection, parse_price};
pub use loader::{LoadError, load_dataset, parse_csv};
pub use logging::init_logging;
pub use settings::{Settings, SettingsError};
