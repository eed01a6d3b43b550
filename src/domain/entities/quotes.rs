//! Provider-independent payloads of the single-value fields.

use serde::Serialize;

/// Retail bank e-rate for USD.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankQuote {
    pub buy: f64,
    pub sell: f64,
    pub mid: f64,
    /// Wall-clock time of the fetch, `HH:MM WIB`.
    pub timestamp: String,
}

/// Central-bank reference rate (JISDOR).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixing {
    pub rate: f64,
    /// Date string exactly as the provider printed it.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexQuote {
    pub value: f64,
    pub change_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyRate {
    pub rate: f64,
    pub decision: Option<String>,
}
