//! Frankfurter (ECB reference rates) time series for USD/IDR. No API key.

use super::RequestStrategy;
use crate::domain::entities::price_history::{PriceHistory, PricePoint};
use crate::domain::error::SourceError;
use crate::domain::ports::source_client::{RawPayload, SourceRequest};
use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, HashMap};

pub const SOURCE: &str = "frankfurter.app";
const BASE_URL: &str = "https://api.frankfurter.app";
const TIMEOUT_SECS: u64 = 10;
/// Days of history requested before the run date.
pub const LOOKBACK_DAYS: i64 = 30;

#[derive(Debug, serde::Deserialize)]
struct TimeSeriesResponse {
    rates: BTreeMap<String, HashMap<String, f64>>,
}

pub fn history_request(as_of: NaiveDate) -> SourceRequest {
    let start = as_of - Duration::days(LOOKBACK_DAYS);
    SourceRequest::json("frankfurter", format!("{BASE_URL}/{start}..{as_of}"), TIMEOUT_SECS)
        .param("from", "USD")
        .param("to", "IDR")
}

/// Turn the `rates` map into ascending daily IDR closes.
pub fn parse_history(raw: RawPayload) -> Result<PriceHistory, SourceError> {
    let data: TimeSeriesResponse = serde_json::from_value(raw.into_json()?)
        .map_err(|e| SourceError::Parse(format!("frankfurter: {e}")))?;

    let mut points = Vec::with_capacity(data.rates.len());
    for (date, rates) in data.rates {
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|e| SourceError::Parse(format!("frankfurter date {date}: {e}")))?;
        let close = rates
            .get("IDR")
            .copied()
            .ok_or_else(|| SourceError::Parse(format!("frankfurter: no IDR rate on {date}")))?;
        points.push(PricePoint::new(date, close));
    }
    Ok(PriceHistory::from_points(points))
}

pub fn history_strategy(as_of: NaiveDate) -> RequestStrategy<PriceHistory> {
    RequestStrategy::new(SOURCE, history_request(as_of), parse_history)
}
