//! Rolling statistics over fixed-size windows
//!
//! Contains the rolling-mean accumulator used for SMA demand rates. Unlike a
//! strict moving average, partial windows at the leading edge of a series
//! still produce a value (the mean of the observations seen so far), so short
//! series are never dropped.

use crate::{MathError, Result};
use std::collections::VecDeque;

/// Streaming rolling mean over a fixed-size window
#[derive(Debug, Clone)]
pub struct RollingMean {
    window: usize,
    values: VecDeque<f64>,
    sum: f64,
}

impl RollingMean {
    /// Create a new rolling mean with the specified window size
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(MathError::InvalidInput(
                "Window size must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            window,
            values: VecDeque::with_capacity(window),
            sum: 0.0,
        })
    }

    /// Update the rolling mean with a new observation
    pub fn update(&mut self, value: f64) {
        // Add new value
        self.values.push_back(value);
        self.sum += value;

        // Remove oldest value if we have more than window values
        if self.values.len() > self.window {
            if let Some(old_value) = self.values.pop_front() {
                self.sum -= old_value;
            }
        }
    }

    /// Get the mean over the observations currently in the window
    ///
    /// A partially filled window yields the mean of the observations seen so
    /// far; only a window with no observations at all is an error.
    pub fn value(&self) -> Result<f64> {
        if self.values.is_empty() {
            return Err(MathError::InsufficientData(
                "No observations in the window".to_string(),
            ));
        }

        Ok(self.sum / self.values.len() as f64)
    }

    /// Get the configured window size
    pub fn window(&self) -> usize {
        self.window
    }

    /// Reset the accumulator, clearing all observations
    pub fn reset(&mut self) {
        self.values.clear();
        self.sum = 0.0;
    }
}

/// Compute the full rolling-mean series for `values`
///
/// Each output element is the mean over a backward-looking window of up to
/// `window` observations ending at that element.
pub fn rolling_mean(values: &[f64], window: usize) -> Result<Vec<f64>> {
    let mut acc = RollingMean::new(window)?;
    let mut means = Vec::with_capacity(values.len());

    for &value in values {
        acc.update(value);
        means.push(acc.value()?);
    }

    Ok(means)
}
