use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rockbed::report::{
    NO_ESTIMATE, render_configuration, render_estimate, render_options, render_sensitivity,
    render_sweep,
};
use rockbed::{App, Selection, Settings, init_logging, parse_price};
use rockbed_core::{
    Dimension, MAX_SWEEP_POINTS, PriceSweep, recompute_sensitivity, sweep_prices,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "rockbed")]
#[command(about = "Cost and payback estimates for rockbed foundation retrofits")]
struct Args {
    /// Path to the data directory (default: ~/.rockbed/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Simulation lookup table (CSV), overrides settings.yaml
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the values still available for each dimension
    Options {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Show what each dimension could switch to, holding the others
        #[arg(long)]
        alternatives: bool,

        #[arg(long)]
        json: bool,
    },
    /// Cost, savings and payback for a complete configuration
    Estimate {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Electricity price, $/kWh
        #[arg(long, value_parser = parse_price)]
        price: Option<f64>,

        #[arg(long)]
        json: bool,
    },
    /// Recompute savings and payback at a hypothetical electricity price
    Sensitivity {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Hypothetical electricity price, $/kWh
        #[arg(long, value_parser = parse_price)]
        price: f64,

        #[arg(long)]
        json: bool,
    },
    /// Payback across a range of electricity prices
    Sweep {
        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(long, value_parser = parse_price, default_value_t = PriceSweep::default().min)]
        min: f64,

        #[arg(long, value_parser = parse_price, default_value_t = PriceSweep::default().max)]
        max: f64,

        #[arg(long, value_parser = parse_price, default_value_t = PriceSweep::default().step)]
        step: f64,

        #[arg(long)]
        json: bool,
    },
    /// Print the suggested starting configuration
    Suggest {
        #[arg(long)]
        json: bool,
    },
    /// Write a default settings file to the data directory
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
struct SelectionArgs {
    /// Start from the suggested configuration
    #[arg(long)]
    suggested: bool,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    soil_type: Option<String>,

    #[arg(long)]
    rockbed_height: Option<String>,

    #[arg(long)]
    foundation_insulation: Option<String>,

    /// Insulation above rockbed
    #[arg(long)]
    above_rockbed: Option<String>,

    /// Insulation below rockbed
    #[arg(long)]
    below_rockbed: Option<String>,

    /// Additional inlet insulation
    #[arg(long)]
    inlet_insulation: Option<String>,
}

impl SelectionArgs {
    fn into_selection(self, price: Option<f64>) -> Selection {
        let values = [
            (Dimension::Location, self.location),
            (Dimension::SoilType, self.soil_type),
            (Dimension::RockbedHeight, self.rockbed_height),
            (Dimension::FoundationInsulation, self.foundation_insulation),
            (Dimension::InsulationAboveRockbed, self.above_rockbed),
            (Dimension::InsulationBelowRockbed, self.below_rockbed),
            (Dimension::AdditionalInletInsulation, self.inlet_insulation),
        ]
        .into_iter()
        .filter_map(|(dim, value)| value.map(|value| (dim, value)))
        .collect();

        Selection {
            suggested: self.suggested,
            values,
            price,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".rockbed")
}

fn print_json<T: Serialize>(value: &T) -> color_eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let settings = Settings::load(&data_dir);

    if let Command::Init { force } = args.command {
        let path = Settings::path(&data_dir);
        if path.exists() && !force {
            color_eyre::eyre::bail!(
                "{} already exists, pass --force to overwrite",
                path.display()
            );
        }
        let path = settings.save(&data_dir)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let app = App::load(args.dataset.as_deref(), settings)?;
    let engine = app.engine();

    match args.command {
        Command::Options {
            selection,
            alternatives,
            json,
        } => {
            let config = app.configure(&selection.into_selection(None));
            let options = if alternatives {
                engine.alternatives(&config)
            } else {
                engine.options(&config)
            };
            if json {
                print_json(&options)?;
            } else {
                print!("{}", render_options(&options));
            }
        }
        Command::Estimate {
            selection,
            price,
            json,
        } => {
            let config = app.configure(&selection.into_selection(price));
            let estimate = engine.resolve_and_estimate(&config);
            if json {
                print_json(&serde_json::json!({
                    "configuration": config,
                    "estimate": estimate,
                    "payback": estimate.payback(),
                }))?;
            } else {
                print!("{}", render_configuration(&config));
                println!();
                print!("{}", render_estimate(&estimate));
            }
        }
        Command::Sensitivity {
            selection,
            price,
            json,
        } => {
            let config = app.configure(&selection.into_selection(None));
            let estimate = engine.resolve_and_estimate(&config);
            let Some(record) = estimate.record else {
                println!("{NO_ESTIMATE}");
                return Ok(());
            };

            let result = recompute_sensitivity(record, price, estimate.cost.total);
            tracing::info!(price, payback = %result.payback, "sensitivity computed");
            if json {
                print_json(&result)?;
            } else {
                print!("{}", render_sensitivity(config.electricity_price(), &result));
            }
        }
        Command::Sweep {
            selection,
            min,
            max,
            step,
            json,
        } => {
            let config = app.configure(&selection.into_selection(None));
            let estimate = engine.resolve_and_estimate(&config);
            let Some(record) = estimate.record else {
                println!("{NO_ESTIMATE}");
                return Ok(());
            };

            let sweep = PriceSweep { min, max, step };
            if sweep.is_empty() {
                tracing::warn!(?sweep, "price sweep is empty or too large");
                color_eyre::eyre::bail!(
                    "price sweep must have min <= max and at most {MAX_SWEEP_POINTS} prices"
                );
            }
            let results = sweep_prices(record, estimate.cost.total, &sweep);
            if json {
                print_json(&results)?;
            } else {
                print!("{}", render_sweep(&results));
            }
        }
        Command::Suggest { json } => {
            let config = app.suggested();
            if json {
                print_json(&config)?;
            } else {
                print!("{}", render_configuration(&config));
            }
        }
        Command::Init { .. } => {}
    }

    tracing::info!("rockbed finished");
    Ok(())
}
