//! Simple-moving-average demand forecasting

use crate::data::{SalesHistory, SalesRecord};
use crate::error::{ForecastError, Result};
use crate::report::{ForecastReport, ProductForecast};
use crate::series::DailySeries;
use chrono::{DateTime, Utc};
use demand_math::projection;
use tracing::debug;

/// SMA-based lead-time demand forecaster
///
/// One window size drives both halves of the computation: the rolling mean is
/// taken over `window` days of history, and the latest mean is treated as the
/// daily demand rate for the next `window` days.
#[derive(Debug, Clone)]
pub struct SmaForecaster {
    window: usize,
}

impl SmaForecaster {
    /// Create a forecaster with the given window size in days
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window size must be positive".to_string(),
            ));
        }

        Ok(Self { window })
    }

    /// Get the window size in days
    pub fn window(&self) -> usize {
        self.window
    }

    /// Forecast lead-time demand for one product's records
    ///
    /// `as_of` anchors the trailing window; records older than
    /// `as_of - window` days are ignored. When no record survives the filter
    /// the projected demand is zero.
    pub fn lead_time_demand(
        &self,
        records: &[SalesRecord],
        as_of: DateTime<Utc>,
    ) -> Result<f64> {
        let series = DailySeries::from_records(records, as_of, self.window)?;
        if series.is_empty() {
            return Ok(0.0);
        }

        let sma = series.rolling_mean(self.window)?;
        let latest = *sma.last().ok_or_else(|| {
            ForecastError::DataError("Rolling mean series is empty".to_string())
        })?;

        Ok(projection::lead_time_demand(latest, self.window)?)
    }

    /// Forecast every product in the history, in input order
    ///
    /// Display names are captured from the first raw record of each product
    /// before any date filtering, so a product whose records all fall outside
    /// the window still reports its name alongside a zero forecast. A product
    /// with no records at all is a fatal error.
    pub fn forecast_all(
        &self,
        history: &SalesHistory,
        as_of: DateTime<Utc>,
    ) -> Result<ForecastReport> {
        let mut report = ForecastReport::new();

        for (product_id, records) in history.iter() {
            let product_name = records
                .first()
                .map(|record| record.product_name.clone())
                .ok_or_else(|| {
                    ForecastError::DataError(format!(
                        "Product '{}' has no sales records",
                        product_id
                    ))
                })?;

            let lead_time_demand = self.lead_time_demand(records, as_of)?;
            debug!(product_id, lead_time_demand, "forecasted product demand");

            report.push(
                product_id.to_string(),
                ProductForecast {
                    product_name,
                    lead_time_demand,
                },
            );
        }

        Ok(report)
    }
}
