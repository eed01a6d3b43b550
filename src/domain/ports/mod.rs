pub mod field_strategy;
pub mod source_client;
