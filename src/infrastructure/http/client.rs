use crate::domain::error::SourceError;
use crate::domain::ports::source_client::{PayloadFormat, RawPayload, SourceClient, SourceRequest};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, USER_AGENT};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; USDIDR-Radar/1.0)";

/// reqwest-backed [`SourceClient`]. One attempt per call, bounded by the
/// request's own timeout.
pub struct HttpSourceClient {
    client: reqwest::Client,
    user_agent: HeaderValue,
}

impl HttpSourceClient {
    /// Fails when the User-Agent is not a valid header value or the TLS
    /// backend cannot be initialised.
    pub fn new(user_agent: &str) -> Result<Self, SourceError> {
        let user_agent = HeaderValue::from_str(user_agent)
            .map_err(|e| SourceError::Config(format!("invalid user agent: {e}")))?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SourceError::Config(format!("http client: {e}")))?;
        Ok(Self { client, user_agent })
    }

    fn prepare(&self, request: &SourceRequest) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .get(&request.url)
            .query(&request.query)
            .timeout(request.timeout);
        if request.browser_headers {
            builder.header(USER_AGENT, self.user_agent.clone())
        } else {
            builder
        }
    }
}

#[async_trait]
impl SourceClient for HttpSourceClient {
    async fn fetch(&self, request: &SourceRequest) -> Result<RawPayload, SourceError> {
        let resp = self
            .prepare(request)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("{}: {e}", request.provider)))?;

        if !resp.status().is_success() {
            return Err(SourceError::Network(format!(
                "{} returned {}",
                request.provider,
                resp.status()
            )));
        }

        match request.format {
            PayloadFormat::Json => resp
                .json::<serde_json::Value>()
                .await
                .map(RawPayload::Json)
                .map_err(|e| SourceError::Parse(format!("{}: {e}", request.provider))),
            PayloadFormat::Text => resp
                .text()
                .await
                .map(RawPayload::Text)
                .map_err(|e| SourceError::Network(format!("{}: {e}", request.provider))),
        }
    }
}
