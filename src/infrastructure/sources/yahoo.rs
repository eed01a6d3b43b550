//! Yahoo Finance v8 chart API (no auth required): dollar index quote and a
//! USD/IDR history substitute.

use super::{frankfurter, RequestStrategy};
use crate::application::analytics::{change_pct, round_to};
use crate::domain::entities::price_history::{PriceHistory, PricePoint};
use crate::domain::entities::quotes::IndexQuote;
use crate::domain::error::SourceError;
use crate::domain::ports::source_client::{RawPayload, SourceRequest};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime};

pub const SOURCE: &str = "Yahoo Finance";
const TIMEOUT_SECS: u64 = 10;
pub const DOLLAR_INDEX_SYMBOL: &str = "DX-Y.NYB";
pub const USD_IDR_SYMBOL: &str = "IDR=X";

#[derive(Debug, serde::Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, serde::Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
struct ChartData {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, serde::Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteSeries>,
}

#[derive(Debug, serde::Deserialize)]
struct QuoteSeries {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

fn chart_endpoint(symbol: &str) -> SourceRequest {
    SourceRequest::json(
        "yahoo",
        format!("https://query1.finance.yahoo.com/v8/finance/chart/{symbol}"),
        TIMEOUT_SECS,
    )
    .param("interval", "1d")
}

/// Daily chart over a range counted back from today (`5d`, `1mo`).
pub fn chart_request(symbol: &str, range: &str) -> SourceRequest {
    chart_endpoint(symbol).param("range", range)
}

fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// USD/IDR closes over the same window Frankfurter is asked for, anchored on
/// the run date so back-dated runs get a full history.
pub fn history_request(as_of: NaiveDate) -> SourceRequest {
    let start = as_of - Duration::days(frankfurter::LOOKBACK_DAYS);
    let end = as_of + Duration::days(1);
    chart_endpoint(USD_IDR_SYMBOL)
        .param("period1", unix_midnight(start).to_string())
        .param("period2", unix_midnight(end).to_string())
}

/// Daily closes with their UTC dates; null closes (halted days) are dropped.
fn parse_closes(raw: RawPayload) -> Result<Vec<(NaiveDate, f64)>, SourceError> {
    let data: ChartResponse = serde_json::from_value(raw.into_json()?)
        .map_err(|e| SourceError::Parse(format!("yahoo: {e}")))?;

    if let Some(err) = data.chart.error {
        return Err(SourceError::Parse(format!("Yahoo error: {err}")));
    }

    let results = data
        .chart
        .result
        .ok_or_else(|| SourceError::Parse("No chart results".into()))?;
    let chart = results
        .into_iter()
        .next()
        .ok_or_else(|| SourceError::Parse("Empty chart results".into()))?;
    let closes = chart
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    let series: Vec<(NaiveDate, f64)> = chart
        .timestamp
        .iter()
        .zip(closes)
        .filter_map(|(ts, close)| {
            let date = DateTime::from_timestamp(*ts, 0)?.date_naive();
            Some((date, close?))
        })
        .collect();

    if series.is_empty() {
        return Err(SourceError::Parse("No closes in chart".into()));
    }
    Ok(series)
}

/// Last close rounded to 2 places, change vs the previous close to 3.
pub fn parse_index_quote(raw: RawPayload) -> Result<IndexQuote, SourceError> {
    let closes: Vec<f64> = parse_closes(raw)?.into_iter().map(|(_, c)| c).collect();
    let last = *closes
        .last()
        .ok_or_else(|| SourceError::Parse("No closes in chart".into()))?;
    Ok(IndexQuote {
        value: round_to(last, 2),
        change_pct: change_pct(&closes),
    })
}

pub fn parse_history(raw: RawPayload, as_of: NaiveDate) -> Result<PriceHistory, SourceError> {
    let points = parse_closes(raw)?
        .into_iter()
        .filter(|(date, _)| *date <= as_of)
        .map(|(date, close)| PricePoint::new(date, close));
    Ok(PriceHistory::from_points(points))
}

pub fn dollar_index_strategy() -> RequestStrategy<IndexQuote> {
    RequestStrategy::new(
        SOURCE,
        chart_request(DOLLAR_INDEX_SYMBOL, "5d"),
        parse_index_quote,
    )
}

pub fn history_strategy(as_of: NaiveDate) -> RequestStrategy<PriceHistory> {
    RequestStrategy::new(SOURCE, history_request(as_of), move |raw| {
        parse_history(raw, as_of)
    })
}
