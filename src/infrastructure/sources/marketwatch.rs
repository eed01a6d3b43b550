//! MarketWatch DXY page scraper, the dollar index substitute.

use super::{element_text, parse_number, selector, RequestStrategy};
use crate::domain::entities::quotes::IndexQuote;
use crate::domain::error::SourceError;
use crate::domain::ports::source_client::{RawPayload, SourceRequest};
use scraper::Html;

pub const SOURCE: &str = "MarketWatch";
const URL: &str = "https://www.marketwatch.com/investing/index/dxy";
const TIMEOUT_SECS: u64 = 10;

pub fn dxy_request() -> SourceRequest {
    SourceRequest::text("marketwatch", URL, TIMEOUT_SECS)
}

/// Last price from `<bg-quote field="Last">`, else the first span whose
/// class mentions `value`. No change figure is available.
pub fn parse_dxy(html: &str) -> Result<IndexQuote, SourceError> {
    let doc = Html::parse_document(html);
    let quote_sel = selector(r#"bg-quote[field="Last"]"#)?;
    let span_sel = selector(r#"span[class*="value"]"#)?;

    let text = doc
        .select(&quote_sel)
        .next()
        .or_else(|| doc.select(&span_sel).next())
        .map(|el| element_text(&el))
        .ok_or_else(|| SourceError::Parse("no DXY quote element".into()))?;

    let value = parse_number(&text)
        .ok_or_else(|| SourceError::Parse(format!("unreadable DXY value '{text}'")))?;
    Ok(IndexQuote {
        value,
        change_pct: None,
    })
}

pub fn dxy_strategy() -> RequestStrategy<IndexQuote> {
    RequestStrategy::new(SOURCE, dxy_request(), |raw: RawPayload| {
        parse_dxy(&raw.into_text())
    })
}
