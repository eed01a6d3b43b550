//! Shared test helpers: a routing stub client and canned provider payloads.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use idr_radar::config::RadarConfig;
use idr_radar::domain::error::SourceError;
use idr_radar::domain::ports::source_client::{RawPayload, SourceClient, SourceRequest};
use idr_radar::IdrRadar;
use std::sync::{Arc, Mutex};

type Matcher = Box<dyn Fn(&SourceRequest) -> bool + Send + Sync>;

/// Serves canned payloads by matching requests; unmatched calls fail as
/// network errors.
pub struct StubClient {
    routes: Vec<(Matcher, Result<RawPayload, SourceError>)>,
    calls: Mutex<Vec<String>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn route(
        mut self,
        matcher: impl Fn(&SourceRequest) -> bool + Send + Sync + 'static,
        response: Result<RawPayload, SourceError>,
    ) -> Self {
        self.routes.push((Box::new(matcher), response));
        self
    }

    pub fn provider(self, provider: &'static str, response: Result<RawPayload, SourceError>) -> Self {
        self.route(move |r| r.provider == provider, response)
    }

    /// Provider ids in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SourceClient for StubClient {
    async fn fetch(&self, request: &SourceRequest) -> Result<RawPayload, SourceError> {
        self.calls.lock().unwrap().push(request.provider.to_string());
        self.routes
            .iter()
            .find(|(matcher, _)| matcher(request))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| Err(SourceError::Network(format!("no route for {}", request.url))))
    }
}

pub fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn radar(client: Arc<StubClient>, news_api_key: Option<&str>) -> IdrRadar {
    let mut config = RadarConfig::for_date(run_date());
    config.news_api_key = news_api_key.map(String::from);
    IdrRadar::with_client(config, client)
}

/// Frankfurter time series with one close per consecutive day ending on the run date.
pub fn frankfurter_payload(closes: &[f64]) -> RawPayload {
    let start = run_date() - Duration::days(closes.len() as i64 - 1);
    let rates: serde_json::Map<String, serde_json::Value> = closes
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let date = start + Duration::days(i as i64);
            (date.to_string(), serde_json::json!({ "IDR": c }))
        })
        .collect();
    RawPayload::Json(serde_json::json!({
        "amount": 1.0,
        "base": "USD",
        "rates": rates,
    }))
}

/// Yahoo chart payload with daily timestamps ending a few days before the run date.
pub fn yahoo_chart(closes: &[f64]) -> RawPayload {
    // 2026-10-01 00:00:00 UTC
    let first = 1_790_812_800_i64;
    let timestamps: Vec<i64> = (0..closes.len() as i64).map(|i| first + i * 86_400).collect();
    RawPayload::Json(serde_json::json!({
        "chart": {
            "result": [{
                "timestamp": timestamps,
                "indicators": { "quote": [{ "close": closes }] }
            }],
            "error": null
        }
    }))
}

pub fn bca_page(buy: &str, sell: &str) -> RawPayload {
    RawPayload::Text(format!(
        "<table><tr><td>USD</td><td>{buy}</td><td>{sell}</td></tr></table>"
    ))
}

pub fn jisdor_page(rate: &str) -> RawPayload {
    RawPayload::Text(format!(
        r#"<table class="table"><tr><th>Tanggal</th><th>Kurs</th></tr>
           <tr><td>17 Oktober 2026</td><td>{rate}</td></tr></table>"#
    ))
}

pub fn newsapi_articles(titles: &[&str]) -> RawPayload {
    let articles: Vec<serde_json::Value> = titles
        .iter()
        .enumerate()
        .map(|(i, t)| {
            serde_json::json!({
                "source": { "id": null, "name": "Kontan" },
                "title": t,
                "description": "",
                "url": format!("https://example.id/{i}"),
                "publishedAt": "2026-10-18T09:30:00Z"
            })
        })
        .collect();
    RawPayload::Json(serde_json::json!({ "status": "ok", "articles": articles }))
}

pub fn cnbc_page(titles: &[&str]) -> RawPayload {
    RawPayload::Text(
        titles
            .iter()
            .map(|t| format!("<article><h2>{t}</h2></article>"))
            .collect(),
    )
}

pub fn is_news_search(request: &SourceRequest) -> bool {
    request.provider == "newsapi"
        && request
            .query_value("q")
            .is_some_and(|q| q != "BI rate Bank Indonesia suku bunga")
}

pub fn is_policy_search(request: &SourceRequest) -> bool {
    request.provider == "newsapi"
        && request.query_value("q") == Some("BI rate Bank Indonesia suku bunga")
}
