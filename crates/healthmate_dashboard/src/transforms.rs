use chrono::NaiveDate;

/// Reduce a date or timestamp string to its `YYYY-MM-DD` day bucket.
///
/// The backend stores log dates as either a plain day or a full timestamp
/// (`2026-02-01T08:15:00`); bucketing trims surrounding whitespace and cuts
/// at the first `'T'`, with no timezone math. Empty or whitespace-only input
/// yields `None`.
pub fn bucket_day(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.split('T').next()
}

/// Parse the day bucket of a date string into a calendar date.
///
/// Used where real date arithmetic is needed (streak walking, series
/// ordering, chart labels); anything `bucket_day` rejects or that is not a
/// well-formed `YYYY-MM-DD` day yields `None`.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    bucket_day(value).and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}

/// Inclusive day-bucket range check using lexicographic comparison, which
/// matches chronological order for `YYYY-MM-DD` keys.
pub fn day_in_range(day: &str, start_day: &str, end_day: &str) -> bool {
    day >= start_day && day <= end_day
}
