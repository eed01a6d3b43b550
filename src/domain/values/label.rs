use serde::Serialize;
use std::fmt;

/// Confidence tier describing how a field's value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    /// The field's primary, authoritative source succeeded.
    Live,
    /// A substitute, derived or estimated source was used.
    Proxy,
    /// No source succeeded; a last-known constant or null is reported.
    Stale,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Live => write!(f, "LIVE"),
            Label::Proxy => write!(f, "PROXY"),
            Label::Stale => write!(f, "STALE"),
        }
    }
}
