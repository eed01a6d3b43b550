//! BCA e-rate page scraper (bank buy/sell for USD).

use super::{element_text, parse_number, selector, RequestStrategy};
use crate::application::analytics::round_to;
use crate::domain::entities::quotes::BankQuote;
use crate::domain::error::SourceError;
use crate::domain::ports::source_client::{RawPayload, SourceRequest};
use crate::domain::values::wib::wib_clock;
use chrono::{DateTime, Utc};
use scraper::Html;

pub const SOURCE: &str = "bca.co.id";
const URL: &str = "https://www.bca.co.id/id/informasi/kurs";
const TIMEOUT_SECS: u64 = 15;
/// Numbers at or below this are row labels or units, not IDR rates.
const MIN_RATE: f64 = 1000.0;

pub fn rate_request() -> SourceRequest {
    SourceRequest::text("bca", URL, TIMEOUT_SECS)
}

/// Find the first table row mentioning USD and take its first two rates
/// (e-rate buy, e-rate sell).
pub fn parse_rate(html: &str, fetched_at: DateTime<Utc>) -> Result<BankQuote, SourceError> {
    let doc = Html::parse_document(html);
    let row_sel = selector("tr")?;
    let cell_sel = selector("td")?;

    for row in doc.select(&row_sel) {
        let cells: Vec<String> = row.select(&cell_sel).map(|c| element_text(&c)).collect();
        let text = cells.join(" ");
        if !(text.contains("USD") || text.contains("Dollar Amerika")) {
            continue;
        }
        let rates: Vec<f64> = cells
            .iter()
            .filter_map(|c| parse_number(c))
            .filter(|n| *n > MIN_RATE)
            .collect();
        if let [buy, sell, ..] = *rates.as_slice() {
            return Ok(BankQuote {
                buy,
                sell,
                mid: round_to((buy + sell) / 2.0, 2),
                timestamp: wib_clock(fetched_at),
            });
        }
    }
    Err(SourceError::Parse("no USD row in BCA rate table".into()))
}

pub fn rate_strategy() -> RequestStrategy<BankQuote> {
    RequestStrategy::new(SOURCE, rate_request(), |raw: RawPayload| {
        parse_rate(&raw.into_text(), Utc::now())
    })
}
