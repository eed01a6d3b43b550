use crate::domain::values::classification::Classification;
use serde::{Deserialize, Serialize};

/// A headline as a provider returned it, before classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
    pub source: String,
    pub datetime: String,
    pub url: Option<String>,
}

/// A headline with its derived sentiment class.
///
/// Only built through [`NewsItem::classified`]; providers never pick the class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub datetime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub classification: Classification,
}

impl NewsItem {
    pub fn classified(headline: Headline, classification: Classification) -> Self {
        Self {
            title: headline.title,
            source: headline.source,
            datetime: headline.datetime,
            url: headline.url,
            classification,
        }
    }
}
