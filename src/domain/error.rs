use thiserror::Error;

/// Why a single source attempt did not yield an acceptable value.
///
/// The resolver treats every variant the same way: it moves on to the next
/// strategy and keeps the message for the field's `error` slot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// Timeout, connection failure or non-2xx status.
    #[error("Network error: {0}")]
    Network(String),

    /// The payload did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The value was extracted but failed the field's sanity bounds.
    #[error("Implausible value: {0}")]
    Implausible(String),

    /// A credential the provider needs is absent, or the client settings
    /// are unusable.
    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Source client error: {0}")]
    Source(#[from] SourceError),
}
