//! Trading-day gate: weekends and the fixed Indonesian/US holiday list.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

/// (date, name) of 2026 Indonesian national and US federal holidays.
pub const HOLIDAYS_2026: &[(&str, &str)] = &[
    ("2026-01-01", "New Year's Day"),
    ("2026-01-27", "Isra Mikraj"),
    ("2026-01-29", "Chinese New Year"),
    ("2026-03-20", "Nyepi"),
    ("2026-03-26", "Good Friday"),
    ("2026-04-02", "Eid al-Fitr (collective leave)"),
    ("2026-04-03", "Eid al-Fitr"),
    ("2026-05-01", "Labour Day"),
    ("2026-05-14", "Ascension Day"),
    ("2026-05-24", "Vesak"),
    ("2026-06-01", "Pancasila Day"),
    ("2026-06-10", "Eid al-Adha"),
    ("2026-07-01", "Islamic New Year"),
    ("2026-08-17", "Independence Day (ID)"),
    ("2026-09-10", "Prophet's Birthday"),
    ("2026-12-25", "Christmas Day"),
    ("2026-01-19", "Martin Luther King Jr. Day"),
    ("2026-02-16", "Presidents' Day"),
    ("2026-05-25", "Memorial Day"),
    ("2026-07-03", "Independence Day (US, observed)"),
    ("2026-09-07", "Labor Day"),
    ("2026-11-26", "Thanksgiving"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketStatus {
    pub open: bool,
    /// Empty when open.
    pub reason: String,
}

pub fn holiday_name(date: NaiveDate) -> Option<&'static str> {
    let key = date.format("%Y-%m-%d").to_string();
    HOLIDAYS_2026
        .iter()
        .find(|(d, _)| *d == key)
        .map(|(_, name)| *name)
}

pub fn market_status(date: NaiveDate) -> MarketStatus {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => {
            let days_to_monday = 7 - i64::from(date.weekday().num_days_from_monday());
            let next_monday = date + Duration::days(days_to_monday);
            MarketStatus {
                open: false,
                reason: format!(
                    "Weekend ({} {date}). Next run: Monday {next_monday}.",
                    date.format("%A")
                ),
            }
        }
        _ => match holiday_name(date) {
            Some(name) => MarketStatus {
                open: false,
                reason: format!("Holiday: {name} ({date})."),
            },
            None => MarketStatus {
                open: true,
                reason: String::new(),
            },
        },
    }
}
