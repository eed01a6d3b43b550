//! Source client port: one bounded network call to one external provider.
//!
//! Implementations never retry and never panic: every failure comes back as
//! a [`SourceError`] so the field resolver can move on to the next strategy.

use crate::domain::error::SourceError;
use async_trait::async_trait;
use std::time::Duration;

/// Expected body format of a provider response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Json,
    /// HTML or XML, handed to the extractor as text.
    Text,
}

/// A single provider call.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRequest {
    /// Short provider id used in logs and for routing in tests (e.g. "frankfurter").
    pub provider: &'static str,
    pub url: String,
    pub query: Vec<(String, String)>,
    /// Send the browser User-Agent; set for scraped HTML pages.
    pub browser_headers: bool,
    pub timeout: Duration,
    pub format: PayloadFormat,
}

impl SourceRequest {
    pub fn json(provider: &'static str, url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            provider,
            url: url.into(),
            query: Vec::new(),
            browser_headers: false,
            timeout: Duration::from_secs(timeout_secs),
            format: PayloadFormat::Json,
        }
    }

    pub fn text(provider: &'static str, url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            format: PayloadFormat::Text,
            browser_headers: true,
            ..Self::json(provider, url, timeout_secs)
        }
    }

    pub fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw, provider-shaped response body.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    Json(serde_json::Value),
    Text(String),
}

impl RawPayload {
    pub fn into_json(self) -> Result<serde_json::Value, SourceError> {
        match self {
            RawPayload::Json(value) => Ok(value),
            RawPayload::Text(text) => serde_json::from_str(&text)
                .map_err(|e| SourceError::Parse(format!("expected JSON body: {e}"))),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            RawPayload::Text(text) => text,
            RawPayload::Json(value) => value.to_string(),
        }
    }
}

#[async_trait]
pub trait SourceClient: Send + Sync {
    /// Perform the call described by `request`.
    async fn fetch(&self, request: &SourceRequest) -> Result<RawPayload, SourceError>;
}
