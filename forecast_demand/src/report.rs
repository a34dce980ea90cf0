//! Forecast report assembly and JSON serialization

use crate::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Forecast output for a single product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductForecast {
    /// Display name from the product's sales history
    pub product_name: String,
    /// Projected total demand over the replenishment window
    pub lead_time_demand: f64,
}

/// Forecasts for every product, in the order they were processed
#[derive(Debug, Clone, Default)]
pub struct ForecastReport {
    entries: Vec<(String, ProductForecast)>,
}

impl ForecastReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product's forecast
    pub fn push(&mut self, product_id: String, forecast: ProductForecast) {
        self.entries.push((product_id, forecast));
    }

    /// Get the forecast for a single product, if present
    pub fn get(&self, product_id: &str) -> Option<&ProductForecast> {
        self.entries
            .iter()
            .find(|(id, _)| id == product_id)
            .map(|(_, forecast)| forecast)
    }

    /// Iterate over forecasts in report order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProductForecast)> {
        self.entries
            .iter()
            .map(|(product_id, forecast)| (product_id.as_str(), forecast))
    }

    /// Number of products in the report
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the report is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the report as a single-line JSON object keyed by product ID
    ///
    /// Keys follow report order and `lead_time_demand` serializes as a JSON
    /// number.
    pub fn to_json(&self) -> Result<String> {
        let mut out = Map::with_capacity(self.entries.len());
        for (product_id, forecast) in &self.entries {
            out.insert(product_id.clone(), serde_json::to_value(forecast)?);
        }

        Ok(serde_json::to_string(&Value::Object(out))?)
    }
}
