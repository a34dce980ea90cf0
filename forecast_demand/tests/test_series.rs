use assert_approx_eq::assert_approx_eq;
use chrono::{NaiveDate, TimeZone, Utc};
use forecast_demand::data::SalesRecord;
use forecast_demand::series::DailySeries;
use pretty_assertions::assert_eq;

fn record(ds: &str, y: f64) -> SalesRecord {
    SalesRecord {
        ds: ds.to_string(),
        y,
        product_name: "Widget".to_string(),
    }
}

fn fixed_as_of() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
}

#[test]
fn test_zero_fill_between_sales_days() {
    let records = vec![record("2024-06-10", 4.0), record("2024-06-12", 6.0)];

    let series = DailySeries::from_records(&records, fixed_as_of(), 30).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(
        series.dates(),
        &[
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
        ]
    );
    assert_eq!(series.quantities(), &[4.0, 0.0, 6.0]);

    // The silent day is present with an explicit zero
    assert_eq!(
        series.quantity_on(NaiveDate::from_ymd_opt(2024, 6, 11).unwrap()),
        Some(0.0)
    );
}

#[test]
fn test_same_day_records_are_summed() {
    let records = vec![
        record("2024-06-20", 2.0),
        record("2024-06-20", 3.5),
        record("2024-06-20T18:00:00", 1.0),
    ];

    let series = DailySeries::from_records(&records, fixed_as_of(), 30).unwrap();

    assert_eq!(series.len(), 1);
    assert_approx_eq!(series.quantities()[0], 6.5);
}

#[test]
fn test_records_before_cutoff_are_dropped() {
    let records = vec![
        record("2024-04-01", 100.0), // far outside the window
        record("2024-06-25", 5.0),
    ];

    let series = DailySeries::from_records(&records, fixed_as_of(), 30).unwrap();

    // The series starts at the earliest retained day, not the stale one
    assert_eq!(series.len(), 1);
    assert_eq!(
        series.dates(),
        &[NaiveDate::from_ymd_opt(2024, 6, 25).unwrap()]
    );
    assert_eq!(series.quantities(), &[5.0]);
}

#[test]
fn test_cutoff_compares_full_timestamps() {
    // as_of is 2024-06-30 12:00, so the cutoff is 2024-05-31 12:00
    let on_cutoff = record("2024-05-31 12:00:00", 7.0);
    let just_before = record("2024-05-31 11:59:59", 9.0);

    let series =
        DailySeries::from_records(&[on_cutoff, just_before], fixed_as_of(), 30).unwrap();

    assert_eq!(series.len(), 1);
    assert_eq!(series.quantities(), &[7.0]);
}

#[test]
fn test_all_stale_records_yield_empty_series() {
    let records = vec![record("2024-01-01", 10.0), record("2024-02-01", 20.0)];

    let series = DailySeries::from_records(&records, fixed_as_of(), 30).unwrap();

    assert!(series.is_empty());
    assert_eq!(series.len(), 0);
    assert!(series.rolling_mean(30).unwrap().is_empty());
}

#[test]
fn test_no_records_yield_empty_series() {
    let series = DailySeries::from_records(&[], fixed_as_of(), 30).unwrap();
    assert!(series.is_empty());
}

#[test]
fn test_rolling_mean_over_daily_series() {
    let records = vec![
        record("2024-06-26", 2.0),
        record("2024-06-27", 4.0),
        record("2024-06-28", 6.0),
    ];

    let series = DailySeries::from_records(&records, fixed_as_of(), 30).unwrap();
    let sma = series.rolling_mean(3).unwrap();

    assert_eq!(sma.len(), 3);
    assert_approx_eq!(sma[0], 2.0);
    assert_approx_eq!(sma[1], 3.0);
    assert_approx_eq!(sma[2], 4.0);
}

#[test]
fn test_rolling_mean_includes_zero_filled_days() {
    let records = vec![record("2024-06-26", 9.0), record("2024-06-28", 3.0)];

    let series = DailySeries::from_records(&records, fixed_as_of(), 30).unwrap();
    let sma = series.rolling_mean(30).unwrap();

    // The gap day dilutes the mean: (9 + 0 + 3) / 3
    assert_approx_eq!(*sma.last().unwrap(), 4.0);
}

#[test]
fn test_unparsable_date_is_fatal() {
    let records = vec![record("not-a-date", 1.0)];
    assert!(DailySeries::from_records(&records, fixed_as_of(), 30).is_err());
}
