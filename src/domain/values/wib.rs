//! Western Indonesia Time (UTC+7), the market's local clock.

use chrono::{DateTime, Duration, NaiveDate, Utc};

pub const WIB_OFFSET_HOURS: i64 = 7;

/// Calendar date in Jakarta at the given instant.
pub fn wib_date(at: DateTime<Utc>) -> NaiveDate {
    (at + Duration::hours(WIB_OFFSET_HOURS)).date_naive()
}

pub fn today_wib() -> NaiveDate {
    wib_date(Utc::now())
}

/// `HH:MM WIB` rendering of an instant.
pub fn wib_clock(at: DateTime<Utc>) -> String {
    (at + Duration::hours(WIB_OFFSET_HOURS))
        .format("%H:%M WIB")
        .to_string()
}
