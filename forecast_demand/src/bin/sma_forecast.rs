//! SMA demand forecast over a JSON sales history
//!
//! Reads a JSON file mapping product IDs to dated sales records, computes a
//! 30-day rolling-mean demand rate per product, and prints the projected
//! lead-time demand for every product as a single JSON object on stdout.
//! Diagnostics go to stderr, controlled by `RUST_LOG`.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use forecast_demand::data::DataLoader;
use forecast_demand::sma::SmaForecaster;
use forecast_demand::DEFAULT_WINDOW_DAYS;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "sma_forecast",
    about = "SMA-based lead-time demand forecast from a JSON sales history"
)]
struct Cli {
    /// Path to the sales history JSON file
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // One clock read for the whole run; every product shares the same cutoff.
    let as_of = Utc::now();

    let history = DataLoader::from_json_file(&cli.input).with_context(|| {
        format!(
            "failed to load sales history from {}",
            cli.input.display()
        )
    })?;
    debug!(products = history.len(), %as_of, "sales history loaded");

    let forecaster = SmaForecaster::new(DEFAULT_WINDOW_DAYS)?;
    let report = forecaster.forecast_all(&history, as_of)?;

    println!("{}", report.to_json()?);

    Ok(())
}
