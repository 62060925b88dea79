use chrono::{DateTime, Datelike, Months, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Calendar arithmetic; day-of-month is clamped to the target month's length.
pub fn months_before(at: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    at.checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Whole days from `from` to `to`, floored (negative spans round toward the past).
pub fn elapsed_days_floor(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

pub fn month_key(at: DateTime<Utc>) -> (i32, u32) {
    (at.year(), at.month())
}
