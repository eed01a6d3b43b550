pub mod aggregator;
pub mod analytics;
pub mod field_resolver;
pub mod market_calendar;
pub mod sentiment;
