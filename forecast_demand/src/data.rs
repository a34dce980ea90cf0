//! Sales history loading and record parsing

use crate::error::{ForecastError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A single dated sales observation for a product
///
/// Records are read-only input; a record missing any of the required fields
/// fails deserialization rather than being silently skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesRecord {
    /// Observation date, ISO-parsable
    pub ds: String,
    /// Quantity sold
    pub y: f64,
    /// Display name of the product
    pub product_name: String,
}

impl SalesRecord {
    /// Parse the `ds` field into a UTC timestamp
    pub fn timestamp(&self) -> Result<DateTime<Utc>> {
        parse_timestamp(&self.ds)
    }
}

/// Parse a date/time string into a UTC timestamp
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS`, and bare
/// `YYYY-MM-DD` (interpreted as midnight UTC).
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let naive = NaiveDateTime::new(date, NaiveTime::default());
        return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
    }

    Err(ForecastError::DataError(format!(
        "Unparsable date '{}'",
        raw
    )))
}

/// Full sales history keyed by product ID, preserving input order
#[derive(Debug, Clone, Default)]
pub struct SalesHistory {
    products: Vec<(String, Vec<SalesRecord>)>,
}

impl SalesHistory {
    /// Iterate over products in the order they appeared in the input
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SalesRecord])> {
        self.products
            .iter()
            .map(|(product_id, records)| (product_id.as_str(), records.as_slice()))
    }

    /// Get the records for a single product, if present
    pub fn get(&self, product_id: &str) -> Option<&[SalesRecord]> {
        self.products
            .iter()
            .find(|(id, _)| id == product_id)
            .map(|(_, records)| records.as_slice())
    }

    /// Number of products in the history
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the history contains no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Loader for sales history data
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a sales history from a JSON file
    ///
    /// The file must contain an object mapping product-ID strings to arrays
    /// of sales records. A missing file or malformed content is fatal; no
    /// partial history is returned.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<SalesHistory> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse a sales history from a JSON string
    pub fn from_json_str(contents: &str) -> Result<SalesHistory> {
        let top: serde_json::Map<String, Value> = serde_json::from_str(contents)?;

        let mut products = Vec::with_capacity(top.len());
        for (product_id, value) in top {
            let records: Vec<SalesRecord> = serde_json::from_value(value).map_err(|e| {
                ForecastError::DataError(format!(
                    "Malformed sales records for product '{}': {}",
                    product_id, e
                ))
            })?;
            products.push((product_id, records));
        }

        debug!(products = products.len(), "loaded sales history");
        Ok(SalesHistory { products })
    }
}
