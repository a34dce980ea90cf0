//! # Demand Math
//!
//! Mathematical calculations for demand forecasting.
//! This crate provides the rolling statistics and projection arithmetic used
//! to turn a daily sales series into a forward demand estimate.

use thiserror::Error;

// Calculation modules
pub mod projection;
pub mod rolling;

/// Errors that can occur in forecasting-related calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for demand math operations
pub type Result<T> = std::result::Result<T, MathError>;
