//! Chart series preparation over raw history records.

use chrono::{Days, NaiveDate};
use serde_json::Value;

use crate::transforms::{bucket_day, day_in_range};
use crate::types::{ChartSeries, MetricSeries};

/// The chart window when the caller gives no range: the last 7 days through
/// `today`, inclusive.
pub fn default_range(today: NaiveDate) -> (String, String) {
    let start = today.checked_sub_days(Days::new(6)).unwrap_or(today);
    (
        start.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    )
}

/// Build chart-ready labels and per-metric value rows from raw JSON records.
///
/// Records work the way the backend history payloads do: objects with a
/// string date field and arbitrary numeric metric fields. Records without a
/// parseable date under `date_key`, or outside the inclusive range, are
/// dropped. Output is ascending by parsed date; for each metric, an absent
/// or non-numeric value becomes `0.0` so every row stays index-aligned with
/// the labels.
pub fn build_series(
    records: &[Value],
    date_key: &str,
    metric_keys: &[String],
    start_day: &str,
    end_day: &str,
) -> ChartSeries {
    let mut dated: Vec<(NaiveDate, &Value)> = records
        .iter()
        .filter_map(|record| {
            let raw = record.get(date_key)?.as_str()?;
            let day = bucket_day(raw)?;
            if !day_in_range(day, start_day, end_day) {
                return None;
            }
            let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
            Some((date, record))
        })
        .collect();
    dated.sort_by_key(|(date, _)| *date);

    let labels = dated
        .iter()
        .map(|(date, _)| date.format("%b %-d").to_string())
        .collect();

    let series = metric_keys
        .iter()
        .map(|metric| MetricSeries {
            metric: metric.clone(),
            values: dated
                .iter()
                .map(|(_, record)| record.get(metric).and_then(Value::as_f64).unwrap_or(0.0))
                .collect(),
        })
        .collect();

    ChartSeries { labels, series }
}
