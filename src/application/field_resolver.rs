//! Generic resolution loop for one logical field.
//!
//! A [`FieldSpec`] is domain configuration: the ordered strategies, the
//! plausibility rule and the value reported when everything fails. The
//! [`FieldResolver`] interprets any spec the same way:
//!
//! 1. Try strategies strictly in order.
//! 2. The first value that passes the plausibility rule wins. It is labeled
//!    `LIVE` when it came from the primary strategy, `PROXY` otherwise.
//! 3. If nothing passes, report the exhaustion value and label, with the
//!    collected failure messages in `error`.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::resolved_field::ResolvedField;
use crate::domain::error::SourceError;
use crate::domain::ports::field_strategy::FieldStrategy;
use crate::domain::ports::source_client::SourceClient;
use crate::domain::values::label::Label;

/// Sanity bounds a value must satisfy before it is accepted.
pub struct Plausibility<T> {
    /// Human-readable rule, used in error messages.
    pub rule: &'static str,
    pub check: fn(&T) -> bool,
}

impl<T> Plausibility<T> {
    pub fn any() -> Self {
        Self {
            rule: "any value",
            check: |_| true,
        }
    }
}

pub struct FieldSpec<T> {
    field: &'static str,
    primary: Box<dyn FieldStrategy<T>>,
    fallbacks: Vec<Box<dyn FieldStrategy<T>>>,
    plausibility: Plausibility<T>,
    exhausted_value: Option<T>,
    exhausted_label: Label,
    exhausted_source: String,
}

impl<T: Send + 'static> FieldSpec<T> {
    /// A field with a primary strategy, no fallbacks, no bounds, and
    /// `null`/`STALE` when the primary fails.
    pub fn new(field: &'static str, primary: impl FieldStrategy<T> + 'static) -> Self {
        Self {
            field,
            primary: Box::new(primary),
            fallbacks: Vec::new(),
            plausibility: Plausibility::any(),
            exhausted_value: None,
            exhausted_label: Label::Stale,
            exhausted_source: "none".to_string(),
        }
    }

    /// Append a fallback; fallbacks run in the order they were added.
    pub fn fallback(mut self, strategy: impl FieldStrategy<T> + 'static) -> Self {
        self.fallbacks.push(Box::new(strategy));
        self
    }

    pub fn plausible(mut self, rule: &'static str, check: fn(&T) -> bool) -> Self {
        self.plausibility = Plausibility { rule, check };
        self
    }

    /// Value, label and source reported when no strategy succeeds.
    pub fn when_exhausted(
        mut self,
        value: Option<T>,
        label: Label,
        source: impl Into<String>,
    ) -> Self {
        self.exhausted_value = value;
        self.exhausted_label = label;
        self.exhausted_source = source.into();
        self
    }

    /// Source names in priority order.
    pub fn order(&self) -> Vec<&str> {
        std::iter::once(self.primary.source())
            .chain(self.fallbacks.iter().map(|s| s.source()))
            .collect()
    }
}

pub struct FieldResolver {
    client: Arc<dyn SourceClient>,
}

impl FieldResolver {
    pub fn new(client: Arc<dyn SourceClient>) -> Self {
        Self { client }
    }

    /// Resolve one field. Never fails: strategy errors only advance the loop.
    pub async fn resolve<T: Send + 'static>(&self, spec: FieldSpec<T>) -> ResolvedField<T> {
        let FieldSpec {
            field,
            primary,
            fallbacks,
            plausibility,
            exhausted_value,
            exhausted_label,
            exhausted_source,
        } = spec;

        let mut failures: Vec<String> = Vec::new();
        let strategies = std::iter::once(primary).chain(fallbacks);

        for (rank, strategy) in strategies.enumerate() {
            let outcome = strategy
                .attempt(self.client.as_ref())
                .await
                .and_then(|value| {
                    if (plausibility.check)(&value) {
                        Ok(value)
                    } else {
                        Err(SourceError::Implausible(format!(
                            "expected {}",
                            plausibility.rule
                        )))
                    }
                });

            match outcome {
                Ok(value) => {
                    let label = if rank == 0 { Label::Live } else { Label::Proxy };
                    info!(field, source = strategy.source(), %label, "field resolved");
                    return ResolvedField::resolved(value, label, strategy.source());
                }
                Err(e) => {
                    warn!(field, source = strategy.source(), error = %e, "strategy failed");
                    failures.push(format!("{}: {e}", strategy.source()));
                }
            }
        }

        warn!(
            field,
            label = %exhausted_label,
            "all strategies failed, using fallback value"
        );
        let error = if failures.is_empty() {
            None
        } else {
            Some(failures.join("; "))
        };
        ResolvedField::exhausted(exhausted_value, exhausted_label, exhausted_source, error)
    }
}
