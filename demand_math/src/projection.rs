//! Demand projection over a replenishment horizon

use crate::{MathError, Result};

/// Project total demand over `horizon_days`, assuming `daily_rate` persists
///
/// The rate is typically the latest rolling-mean value of a daily sales
/// series; the horizon is the replenishment lead time in days.
pub fn lead_time_demand(daily_rate: f64, horizon_days: usize) -> Result<f64> {
    if horizon_days == 0 {
        return Err(MathError::InvalidInput(
            "Horizon must be at least one day".to_string(),
        ));
    }

    if !daily_rate.is_finite() {
        return Err(MathError::CalculationError(
            "Daily rate is not finite".to_string(),
        ));
    }

    Ok(daily_rate * horizon_days as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_time_demand_scales_rate() {
        assert_eq!(lead_time_demand(5.0, 30).unwrap(), 150.0);
        assert_eq!(lead_time_demand(0.0, 30).unwrap(), 0.0);
    }

    #[test]
    fn test_lead_time_demand_fractional_rate() {
        let demand = lead_time_demand(2.5, 14).unwrap();
        assert_eq!(demand, 35.0);
    }

    #[test]
    fn test_lead_time_demand_rejects_zero_horizon() {
        assert!(lead_time_demand(5.0, 0).is_err());
    }

    #[test]
    fn test_lead_time_demand_rejects_non_finite_rate() {
        assert!(lead_time_demand(f64::NAN, 30).is_err());
        assert!(lead_time_demand(f64::INFINITY, 30).is_err());
    }
}
