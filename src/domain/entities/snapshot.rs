//! The pipeline's sole output record and its blocks.
//!
//! Struct field order is the serialized JSON field order.

use crate::domain::entities::news_item::NewsItem;
use crate::domain::entities::sentiment_theme::SentimentTheme;
use crate::domain::values::label::Label;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSnapshot {
    pub meta: SnapshotMeta,
    pub spot: SpotBlock,
    pub bank_rate: BankRateBlock,
    pub official_fixing: FixingBlock,
    pub dollar_index: DollarIndexBlock,
    pub policy_rate: PolicyRateBlock,
    pub historical: HistoricalBlock,
    pub news: Vec<NewsItem>,
    pub sentiment_themes: Vec<SentimentTheme>,
    pub volatility: Volatility,
    pub sentiment_dist: SentimentDistribution,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotMeta {
    pub date: NaiveDate,
    pub generated_at: DateTime<Utc>,
    /// `HH:MM WIB` (UTC+7).
    pub generated_at_wib: String,
}

/// Headline USD/IDR value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotBlock {
    pub value: Option<f64>,
    pub change_pct: Option<f64>,
    pub label: Label,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankRateBlock {
    pub buy: Option<f64>,
    pub sell: Option<f64>,
    pub mid: Option<f64>,
    pub timestamp: Option<String>,
    pub label: Label,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixingBlock {
    pub rate: Option<f64>,
    pub date: Option<String>,
    pub label: Label,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DollarIndexBlock {
    pub value: Option<f64>,
    pub change_pct: Option<f64>,
    pub label: Label,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyRateBlock {
    pub rate: Option<f64>,
    pub decision: Option<String>,
    pub label: Label,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalBlock {
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<f64>,
    pub ma5: Vec<Option<f64>>,
    pub ma20: Vec<Option<f64>>,
    pub range_30d_low: Option<f64>,
    pub range_30d_high: Option<f64>,
    pub avg_30d: Option<f64>,
    pub label: Label,
}

/// Qualitative read of the volatility proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VolatilityLevel {
    High,
    Medium,
    Low,
}

impl VolatilityLevel {
    /// `High` above 0.5%, `Medium` above 0.2%, otherwise `Low`.
    pub fn from_atr_pct(atr_pct: f64) -> Self {
        if atr_pct > 0.5 {
            VolatilityLevel::High
        } else if atr_pct > 0.2 {
            VolatilityLevel::Medium
        } else {
            VolatilityLevel::Low
        }
    }
}

impl fmt::Display for VolatilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolatilityLevel::High => write!(f, "High"),
            VolatilityLevel::Medium => write!(f, "Medium"),
            VolatilityLevel::Low => write!(f, "Low"),
        }
    }
}

/// Standard-deviation proxy for volatility. Not a true Average True Range:
/// only closes are available. Always labeled `PROXY`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Volatility {
    pub atr: Option<f64>,
    pub atr_pct: Option<f64>,
    pub interpretation: Option<VolatilityLevel>,
    pub label: Label,
}

impl Volatility {
    pub fn unavailable() -> Self {
        Self {
            atr: None,
            atr_pct: None,
            interpretation: None,
            label: Label::Proxy,
        }
    }
}

/// Per-class share of the news set, each rounded on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub bullish_pct: u32,
    pub bearish_pct: u32,
    pub neutral_pct: u32,
}
