use crate::domain::error::SourceError;
use crate::domain::ports::source_client::SourceClient;
use async_trait::async_trait;

/// One way of obtaining a logical field: call a provider and extract a
/// provider-independent value from its payload.
///
/// Strategies do not judge plausibility and do not pick labels; the field
/// resolver does both based on the strategy's position in the field's order.
#[async_trait]
pub trait FieldStrategy<T>: Send + Sync {
    /// Source name reported on the resolved field (e.g. "frankfurter.app").
    fn source(&self) -> &str;

    async fn attempt(&self, client: &dyn SourceClient) -> Result<T, SourceError>;
}
