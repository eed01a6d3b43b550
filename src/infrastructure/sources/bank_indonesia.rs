//! Bank Indonesia JISDOR reference rate scraper.

use super::{element_text, parse_number, selector, RequestStrategy};
use crate::domain::entities::quotes::Fixing;
use crate::domain::error::SourceError;
use crate::domain::ports::source_client::{RawPayload, SourceRequest};
use regex::Regex;
use scraper::Html;

pub const SOURCE: &str = "bi.go.id";
const URL: &str = "https://www.bi.go.id/id/statistik/informasi-kurs/jisdor/default.aspx";
const TIMEOUT_SECS: u64 = 15;
const MIN_FIXING: f64 = 10_000.0;

pub fn fixing_request() -> SourceRequest {
    SourceRequest::text("bank_indonesia", URL, TIMEOUT_SECS)
}

/// Read the most recent fixing from the first data table on the page.
///
/// Only the first table whose class mentions `table` or `grid` is read, and
/// only its first two data rows (newest first on the BI page).
pub fn parse_fixing(html: &str) -> Result<Fixing, SourceError> {
    let doc = Html::parse_document(html);
    let class_re = Regex::new(r"(?i)table|grid")
        .map_err(|e| SourceError::Parse(format!("class pattern: {e}")))?;
    let table_sel = selector("table")?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("td")?;

    let table = doc
        .select(&table_sel)
        .find(|t| t.value().attr("class").is_some_and(|c| class_re.is_match(c)))
        .ok_or_else(|| SourceError::Parse("no JISDOR table".into()))?;

    for row in table.select(&row_sel).skip(1).take(2) {
        let cells: Vec<String> = row.select(&cell_sel).map(|c| element_text(&c)).collect();
        if cells.len() < 2 {
            continue;
        }
        if let Some(rate) = parse_number(&cells[1]).filter(|r| *r > MIN_FIXING) {
            return Ok(Fixing {
                rate,
                date: cells[0].clone(),
            });
        }
    }
    Err(SourceError::Parse("no JISDOR rate in table".into()))
}

pub fn fixing_strategy() -> RequestStrategy<Fixing> {
    RequestStrategy::new(SOURCE, fixing_request(), |raw: RawPayload| {
        parse_fixing(&raw.into_text())
    })
}
