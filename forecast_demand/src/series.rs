//! Daily aggregation of sales records into contiguous series

use crate::data::SalesRecord;
use crate::error::{ForecastError, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::BTreeMap;
use tracing::debug;

/// A contiguous per-day series of summed sales quantities
///
/// Construction resamples an irregular set of records onto a daily index:
/// same-day records are summed and days with no records carry a zero, so
/// consumers can assume one bucket per calendar day with no gaps.
#[derive(Debug, Clone, Default)]
pub struct DailySeries {
    dates: Vec<NaiveDate>,
    quantities: Vec<f64>,
}

impl DailySeries {
    /// Build the trailing-window daily series for one product
    ///
    /// Records dated before `as_of - window_days` are dropped. The survivors
    /// are bucketed by calendar day, summed, and reindexed from the earliest
    /// to the latest retained day inclusive. The series is empty when no
    /// record survives the window filter.
    pub fn from_records(
        records: &[SalesRecord],
        as_of: DateTime<Utc>,
        window_days: usize,
    ) -> Result<Self> {
        let cutoff = as_of - Duration::days(window_days as i64);

        let mut daily_totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        let mut retained = 0usize;
        for record in records {
            let timestamp = record.timestamp()?;
            if timestamp < cutoff {
                continue;
            }
            retained += 1;
            *daily_totals.entry(timestamp.date_naive()).or_insert(0.0) += record.y;
        }
        debug!(total = records.len(), retained, "filtered sales records");

        let (first, last) = match (daily_totals.keys().next(), daily_totals.keys().next_back()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Ok(Self::default()),
        };

        let mut dates = Vec::new();
        let mut quantities = Vec::new();
        let mut day = first;
        while day <= last {
            dates.push(day);
            quantities.push(daily_totals.get(&day).copied().unwrap_or(0.0));
            day = day.succ_opt().ok_or_else(|| {
                ForecastError::DataError("Date overflow while reindexing".to_string())
            })?;
        }

        Ok(Self { dates, quantities })
    }

    /// Get the daily index
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Get the summed quantity per day
    pub fn quantities(&self) -> &[f64] {
        &self.quantities
    }

    /// Quantity for a single day, if it falls inside the series
    pub fn quantity_on(&self, date: NaiveDate) -> Option<f64> {
        self.dates
            .iter()
            .position(|d| *d == date)
            .map(|i| self.quantities[i])
    }

    /// Rolling-mean series over the daily quantities
    ///
    /// Each day's value is the mean over a backward-looking window of up to
    /// `window` days ending at that day; partial windows at the start of the
    /// series still produce a value.
    pub fn rolling_mean(&self, window: usize) -> Result<Vec<f64>> {
        Ok(demand_math::rolling::rolling_mean(&self.quantities, window)?)
    }

    /// Number of days in the series
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
