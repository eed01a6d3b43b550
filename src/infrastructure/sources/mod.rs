//! Provider adapters: request builders, payload extractors and the
//! per-field strategy catalog.

pub mod bank_indonesia;
pub mod bca;
pub mod catalog;
pub mod cnbc;
pub mod frankfurter;
pub mod marketwatch;
pub mod newsapi;
pub mod yahoo;

use crate::domain::error::SourceError;
use crate::domain::ports::field_strategy::FieldStrategy;
use crate::domain::ports::source_client::{RawPayload, SourceClient, SourceRequest};
use async_trait::async_trait;

type Extractor<T> = Box<dyn Fn(RawPayload) -> Result<T, SourceError> + Send + Sync>;

/// A strategy made of exactly one provider call and one extractor.
pub struct RequestStrategy<T> {
    source: &'static str,
    request: SourceRequest,
    extract: Extractor<T>,
}

impl<T> RequestStrategy<T> {
    pub fn new(
        source: &'static str,
        request: SourceRequest,
        extract: impl Fn(RawPayload) -> Result<T, SourceError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            source,
            request,
            extract: Box::new(extract),
        }
    }
}

#[async_trait]
impl<T: Send + 'static> FieldStrategy<T> for RequestStrategy<T> {
    fn source(&self) -> &str {
        self.source
    }

    async fn attempt(&self, client: &dyn SourceClient) -> Result<T, SourceError> {
        let raw = client.fetch(&self.request).await?;
        (self.extract)(raw)
    }
}

/// Parse a number printed with either `1,234.56` or `1.234,56` grouping.
///
/// A lone separator followed by exactly three digits is read as a
/// thousands separator (`16.250` is 16250).
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let s: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    if !s.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let Some(idx) = s.rfind(|c: char| c == '.' || c == ',') else {
        return s.parse().ok();
    };
    let sep = s[idx..].chars().next()?;
    let other = if sep == '.' { ',' } else { '.' };
    let frac = &s[idx + 1..];
    let decimal = s.contains(other) || frac.len() != 3;

    let normalized = if decimal {
        if s.matches(sep).count() > 1 {
            return None;
        }
        let int_part: String = s[..idx].chars().filter(|c| *c != other).collect();
        format!("{int_part}.{frac}")
    } else {
        s.chars().filter(|c| c.is_ascii_digit()).collect()
    };
    normalized.parse().ok()
}

/// Whitespace-normalized text content of an element.
pub(crate) fn element_text(el: &scraper::ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn selector(css: &str) -> Result<scraper::Selector, SourceError> {
    scraper::Selector::parse(css)
        .map_err(|e| SourceError::Parse(format!("bad selector {css}: {e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_english_grouping() {
        assert_eq!(parse_number("16,250.00"), Some(16250.0));
        assert_eq!(parse_number("1,234,567"), Some(1234567.0));
        assert_eq!(parse_number("99.12"), Some(99.12));
    }

    #[test]
    fn test_parse_number_indonesian_grouping() {
        assert_eq!(parse_number("16.250,00"), Some(16250.0));
        assert_eq!(parse_number("16.250"), Some(16250.0));
        assert_eq!(parse_number("4,75"), Some(4.75));
    }

    #[test]
    fn test_parse_number_plain_and_garbage() {
        assert_eq!(parse_number(" 16250 "), Some(16250.0));
        assert_eq!(parse_number("USD"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("1.2.3,4.5"), None);
    }

    #[test]
    fn test_only_scraped_pages_send_browser_headers() {
        let as_of = chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert!(bca::rate_request().browser_headers);
        assert!(bank_indonesia::fixing_request().browser_headers);
        assert!(marketwatch::dxy_request().browser_headers);
        assert!(cnbc::search_request().browser_headers);
        assert!(!frankfurter::history_request(as_of).browser_headers);
        assert!(!yahoo::history_request(as_of).browser_headers);
        assert!(!yahoo::chart_request(yahoo::DOLLAR_INDEX_SYMBOL, "5d").browser_headers);
    }
}
