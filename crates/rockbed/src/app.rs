//! Ties the loaded engine to user settings and command-line selections

use std::path::{Path, PathBuf};

use rockbed_core::{Configuration, Dimension, Engine};

use crate::loader::load_dataset;
use crate::settings::Settings;

/// Dimension values and price requested on the command line
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Start from the suggested configuration instead of an empty one
    pub suggested: bool,
    pub values: Vec<(Dimension, String)>,
    pub price: Option<f64>,
}

/// Parse a positive, finite electricity price in $/kWh
pub fn parse_price(text: &str) -> Result<f64, String> {
    let price: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("{text:?} is not a number"))?;
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(format!("electricity price must be positive, got {text}"))
    }
}

pub struct App {
    engine: Engine,
    settings: Settings,
}

impl App {
    pub fn new(engine: Engine, settings: Settings) -> Self {
        Self { engine, settings }
    }

    /// Load the lookup table named on the command line, or in settings
    pub fn load(dataset: Option<&Path>, settings: Settings) -> color_eyre::Result<Self> {
        let path: PathBuf = match dataset.map(Path::to_path_buf).or_else(|| settings.dataset.clone()) {
            Some(path) => path,
            None => color_eyre::eyre::bail!(
                "no dataset given: pass --dataset or set `dataset` in settings.yaml"
            ),
        };

        tracing::info!(path = %path.display(), "loading lookup table");
        let dataset = load_dataset(&path)?;
        if dataset.is_empty() {
            tracing::warn!(path = %path.display(), "lookup table has no usable rows");
        }

        Ok(Self::new(Engine::new(dataset), settings))
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Suggested starting configuration at the configured electricity price
    pub fn suggested(&self) -> Configuration {
        let global = self.engine.options(&Configuration::default());
        Configuration::suggested(&global).with_electricity_price(self.settings.electricity_price)
    }

    /// Build the configuration a command should run against
    pub fn configure(&self, selection: &Selection) -> Configuration {
        let mut config = if selection.suggested {
            self.suggested()
        } else {
            Configuration::default().with_electricity_price(self.settings.electricity_price)
        };

        for (dim, value) in &selection.values {
            config.set(*dim, value.as_str());
        }
        if let Some(price) = selection.price {
            config.insulation.electricity_price = price;
        }

        tracing::debug!(?config, "configuration built");
        config
    }
}
