//! NewsAPI `everything` search: rupiah headlines and the BI policy rate as
//! quoted in recent coverage. Requires `NEWS_API_KEY`.

use crate::domain::entities::news_item::Headline;
use crate::domain::entities::quotes::PolicyRate;
use crate::domain::error::SourceError;
use crate::domain::ports::field_strategy::FieldStrategy;
use crate::domain::ports::source_client::{RawPayload, SourceClient, SourceRequest};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::collections::HashSet;
use tracing::warn;

pub const SOURCE: &str = "NewsAPI";
const URL: &str = "https://newsapi.org/v2/everything";
const TIMEOUT_SECS: u64 = 10;

pub const NEWS_QUERIES: &[&str] = &[
    "rupiah USD IDR kurs",
    "Bank Indonesia rupiah dollar",
    "nilai tukar rupiah",
];
pub const POLICY_RATE_QUERY: &str = "BI rate Bank Indonesia suku bunga";
const HEADLINES_WANTED: usize = 5;

/// Band a quoted percentage must fall in to be read as the policy rate.
pub const POLICY_RATE_BAND: (f64, f64) = (2.0, 10.0);

#[derive(Debug, serde::Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    source: Option<ArticleSource>,
}

#[derive(Debug, serde::Deserialize)]
struct ArticleSource {
    #[serde(default)]
    name: Option<String>,
}

fn search_request(query: &str, page_size: u32, api_key: &str) -> SourceRequest {
    SourceRequest::json("newsapi", URL, TIMEOUT_SECS)
        .param("q", query)
        .param("language", "id")
        .param("sortBy", "publishedAt")
        .param("pageSize", page_size.to_string())
        .param("apiKey", api_key)
}

fn parse_articles(raw: RawPayload) -> Result<Vec<Article>, SourceError> {
    let data: EverythingResponse = serde_json::from_value(raw.into_json()?)
        .map_err(|e| SourceError::Parse(format!("newsapi: {e}")))?;
    Ok(data.articles)
}

fn require_key(api_key: &Option<String>) -> Result<&str, SourceError> {
    api_key
        .as_deref()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| SourceError::Config("NEWS_API_KEY not set".into()))
}

/// `2026-10-18T09:30:00Z` → `2026-10-18 09:30`.
fn short_datetime(published_at: &str) -> String {
    published_at.chars().take(16).collect::<String>().replace('T', " ")
}

/// Headlines from the three rupiah searches, de-duplicated by title,
/// stopping once five are collected.
pub struct NewsApiHeadlines {
    api_key: Option<String>,
    since: NaiveDate,
}

impl NewsApiHeadlines {
    pub fn new(api_key: Option<String>, as_of: NaiveDate) -> Self {
        Self {
            api_key,
            since: as_of - Duration::days(1),
        }
    }

    pub fn requests(&self, api_key: &str) -> Vec<SourceRequest> {
        NEWS_QUERIES
            .iter()
            .map(|q| {
                search_request(q, HEADLINES_WANTED as u32, api_key)
                    .param("from", self.since.to_string())
            })
            .collect()
    }
}

#[async_trait]
impl FieldStrategy<Vec<Headline>> for NewsApiHeadlines {
    fn source(&self) -> &str {
        SOURCE
    }

    async fn attempt(&self, client: &dyn SourceClient) -> Result<Vec<Headline>, SourceError> {
        let api_key = require_key(&self.api_key)?;
        let mut seen: HashSet<String> = HashSet::new();
        let mut headlines = Vec::new();
        let mut last_error = None;
        let mut any_ok = false;

        for request in self.requests(api_key) {
            match client.fetch(&request).await.and_then(parse_articles) {
                Ok(articles) => {
                    any_ok = true;
                    for article in articles {
                        let Some(title) = article.title.filter(|t| !t.is_empty()) else {
                            continue;
                        };
                        if !seen.insert(title.clone()) {
                            continue;
                        }
                        headlines.push(Headline {
                            title,
                            source: article.source.and_then(|s| s.name).unwrap_or_default(),
                            datetime: short_datetime(article.published_at.as_deref().unwrap_or("")),
                            url: article.url,
                        });
                    }
                }
                Err(e) => {
                    warn!(query = ?request.query_value("q"), error = %e, "news query failed");
                    last_error = Some(e);
                }
            }
            if headlines.len() >= HEADLINES_WANTED {
                break;
            }
        }

        match (any_ok, last_error) {
            (false, Some(e)) => Err(e),
            _ => {
                headlines.truncate(HEADLINES_WANTED);
                Ok(headlines)
            }
        }
    }
}

/// Policy rate read from the newest articles about BI rate decisions.
pub struct NewsApiPolicyRate {
    api_key: Option<String>,
}

impl NewsApiPolicyRate {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

/// First `N.NN%` (or `N,NN%`) quote inside the policy-rate band.
pub fn extract_policy_rate(texts: &[String]) -> Result<PolicyRate, SourceError> {
    let re = Regex::new(r"(\d+[.,]\d+)\s*%")
        .map_err(|e| SourceError::Parse(format!("rate pattern: {e}")))?;
    let (low, high) = POLICY_RATE_BAND;
    for text in texts {
        let Some(caps) = re.captures(text) else {
            continue;
        };
        let Ok(rate) = caps[1].replace(',', ".").parse::<f64>() else {
            continue;
        };
        if (low..=high).contains(&rate) {
            return Ok(PolicyRate {
                rate,
                decision: None,
            });
        }
    }
    Err(SourceError::Parse("no policy rate quoted in articles".into()))
}

#[async_trait]
impl FieldStrategy<PolicyRate> for NewsApiPolicyRate {
    fn source(&self) -> &str {
        SOURCE
    }

    async fn attempt(&self, client: &dyn SourceClient) -> Result<PolicyRate, SourceError> {
        let api_key = require_key(&self.api_key)?;
        let request = search_request(POLICY_RATE_QUERY, 3, api_key);
        let articles = parse_articles(client.fetch(&request).await?)?;
        let texts: Vec<String> = articles
            .into_iter()
            .map(|a| {
                format!(
                    "{} {}",
                    a.title.unwrap_or_default(),
                    a.description.unwrap_or_default()
                )
            })
            .collect();
        extract_policy_rate(&texts)
    }
}
