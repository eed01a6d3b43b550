use crate::domain::values::classification::Classification;
use serde::Serialize;

/// Synthetic discussion theme derived from the news set.
///
/// Never observed from a social feed; `is_proxy` is always `true`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentTheme {
    pub index: u8,
    pub tag: String,
    pub engagement: String,
    pub summary: String,
    pub classification: Classification,
    pub is_proxy: bool,
}

impl SentimentTheme {
    pub fn proxy(
        index: u8,
        tag: &str,
        engagement: &str,
        summary: &str,
        classification: Classification,
    ) -> Self {
        Self {
            index,
            tag: tag.to_string(),
            engagement: engagement.to_string(),
            summary: summary.to_string(),
            classification,
            is_proxy: true,
        }
    }
}
