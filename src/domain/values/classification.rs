use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional read of a headline or theme with respect to the rupiah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    BullishIdr,
    BearishIdr,
    Neutral,
    /// Only used by synthesized sentiment themes, never by news classification.
    Mixed,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::BullishIdr => write!(f, "BULLISH_IDR"),
            Classification::BearishIdr => write!(f, "BEARISH_IDR"),
            Classification::Neutral => write!(f, "NEUTRAL"),
            Classification::Mixed => write!(f, "MIXED"),
        }
    }
}
