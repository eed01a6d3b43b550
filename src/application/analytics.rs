//! Pure numeric derivations over resolved closes. No network access.

use crate::domain::entities::snapshot::{Volatility, VolatilityLevel};
use crate::domain::values::label::Label;

/// Closes needed before the volatility proxy is defined.
pub const VOLATILITY_WINDOW: usize = 14;

/// Round the exact binary value to `decimals` places, ties to even, so
/// 0.3125 becomes 0.312 and 99.035 (stored just below) becomes 99.03.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Trailing simple moving average. `None` until `window` closes exist.
pub fn moving_average(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; closes.len()];
    }
    (0..closes.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                let slice = &closes[i + 1 - window..=i];
                Some(round_to(slice.iter().sum::<f64>() / window as f64, 2))
            }
        })
        .collect()
}

/// Percent change between the last two closes, rounded to 3 places.
///
/// A single close compares against itself (0.0); no closes gives `None`.
pub fn change_pct(closes: &[f64]) -> Option<f64> {
    let last = *closes.last()?;
    let prev = if closes.len() >= 2 {
        closes[closes.len() - 2]
    } else {
        last
    };
    if prev == 0.0 {
        return Some(0.0);
    }
    Some(round_to((last - prev) / prev * 100.0, 3))
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1). Needs at least two values.
fn sample_stdev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(var.sqrt())
}

/// Standard deviation of the trailing 14 closes, absolute and as a
/// percentage of their mean.
pub fn volatility_proxy(closes: &[f64]) -> Volatility {
    if closes.len() < VOLATILITY_WINDOW {
        return Volatility::unavailable();
    }
    let window = &closes[closes.len() - VOLATILITY_WINDOW..];
    let Some(stdev) = sample_stdev(window) else {
        return Volatility::unavailable();
    };
    let m = mean(window);
    if m == 0.0 {
        return Volatility::unavailable();
    }
    let atr_pct = round_to(stdev / m * 100.0, 3);
    Volatility {
        atr: Some(round_to(stdev, 2)),
        atr_pct: Some(atr_pct),
        interpretation: Some(VolatilityLevel::from_atr_pct(atr_pct)),
        label: Label::Proxy,
    }
}

/// Low, high and rounded mean of the closes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeStats {
    pub low: f64,
    pub high: f64,
    pub avg: f64,
}

pub fn range_stats(closes: &[f64]) -> Option<RangeStats> {
    if closes.is_empty() {
        return None;
    }
    let low = closes.iter().copied().fold(f64::INFINITY, f64::min);
    let high = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(RangeStats {
        low,
        high,
        avg: round_to(mean(closes), 2),
    })
}
