pub mod news_item;
pub mod price_history;
pub mod quotes;
pub mod resolved_field;
pub mod sentiment_theme;
pub mod snapshot;
