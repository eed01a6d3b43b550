//! CNBC Indonesia search page scraper, the headline substitute when
//! NewsAPI is unavailable.

use super::{element_text, selector, RequestStrategy};
use crate::domain::entities::news_item::Headline;
use crate::domain::error::SourceError;
use crate::domain::ports::source_client::{RawPayload, SourceRequest};
use chrono::NaiveDate;
use scraper::Html;

pub const SOURCE: &str = "CNBCIndonesia";
const URL: &str = "https://www.cnbcindonesia.com/search";
const TIMEOUT_SECS: u64 = 15;
const MAX_ARTICLES: usize = 5;

pub fn search_request() -> SourceRequest {
    SourceRequest::text("cnbc_indonesia", URL, TIMEOUT_SECS).param("query", "rupiah kurs dollar")
}

/// Title of each of the first five `<article>` blocks, taken from the first
/// heading or link inside it. The page carries no timestamps, so every
/// headline is dated with the run date.
pub fn parse_headlines(html: &str, as_of: NaiveDate) -> Result<Vec<Headline>, SourceError> {
    let doc = Html::parse_document(html);
    let article_sel = selector("article")?;
    let title_sel = selector("h2, h3, a")?;
    let link_sel = selector("a[href]")?;

    let headlines = doc
        .select(&article_sel)
        .take(MAX_ARTICLES)
        .filter_map(|article| {
            let title_el = article.select(&title_sel).next()?;
            let title = element_text(&title_el);
            if title.is_empty() {
                return None;
            }
            Some(Headline {
                title,
                source: SOURCE.to_string(),
                datetime: as_of.to_string(),
                url: article
                    .select(&link_sel)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .map(String::from),
            })
        })
        .collect();
    Ok(headlines)
}

pub fn headlines_strategy(as_of: NaiveDate) -> RequestStrategy<Vec<Headline>> {
    RequestStrategy::new(SOURCE, search_request(), move |raw: RawPayload| {
        parse_headlines(&raw.into_text(), as_of)
    })
}
