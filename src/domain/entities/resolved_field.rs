use crate::domain::values::label::Label;
use serde::Serialize;

/// A logical field after resolution, carrying the confidence label assigned
/// at resolution time.
///
/// Invariant: a missing value never carries [`Label::Live`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedField<T> {
    value: Option<T>,
    label: Label,
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ResolvedField<T> {
    /// A value produced by one of the field's strategies.
    pub fn resolved(value: T, label: Label, source: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            label,
            source: source.into(),
            error: None,
        }
    }

    /// Every strategy failed; report the field's last-known value (if any).
    /// A `Live` label is downgraded to `Stale` since nothing was observed.
    pub fn exhausted(
        value: Option<T>,
        label: Label,
        source: impl Into<String>,
        error: Option<String>,
    ) -> Self {
        let label = match label {
            Label::Live => Label::Stale,
            other => other,
        };
        Self {
            value,
            label,
            source: source.into(),
            error,
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_live(&self) -> bool {
        self.label == Label::Live
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Transform the value while keeping label, source and error.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResolvedField<U> {
        ResolvedField {
            value: self.value.map(f),
            label: self.label,
            source: self.source,
            error: self.error,
        }
    }
}
