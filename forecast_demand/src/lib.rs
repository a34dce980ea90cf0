//! # Forecast Demand
//!
//! A Rust library for SMA-based product demand forecasting from dated sales
//! records.
//!
//! ## Features
//!
//! - Sales history loading from JSON (product ID mapped to dated records)
//! - Trailing-window daily aggregation with zero-filled gaps
//! - Rolling-mean (SMA) demand rate with partial leading windows
//! - Lead-time demand projection over the replenishment window
//!
//! ## Quick Start
//!
//! ```no_run
//! use chrono::Utc;
//! use forecast_demand::data::DataLoader;
//! use forecast_demand::sma::SmaForecaster;
//!
//! # fn main() -> forecast_demand::error::Result<()> {
//! // Load sales history
//! let history = DataLoader::from_json_file("sales.json")?;
//!
//! // Forecast demand over a 30-day replenishment window
//! let forecaster = SmaForecaster::new(30)?;
//! let report = forecaster.forecast_all(&history, Utc::now())?;
//!
//! println!("{}", report.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod report;
pub mod series;
pub mod sma;

// Re-export commonly used types
pub use crate::data::{DataLoader, SalesHistory, SalesRecord};
pub use crate::error::ForecastError;
pub use crate::report::{ForecastReport, ProductForecast};
pub use crate::series::DailySeries;
pub use crate::sma::SmaForecaster;

/// Window size in days shared by the rolling mean and the forward projection
pub const DEFAULT_WINDOW_DAYS: usize = 30;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
