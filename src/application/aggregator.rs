//! Drives field resolution and assembles the immutable [`MarketSnapshot`].

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::application::analytics::{change_pct, moving_average, range_stats, volatility_proxy};
use crate::application::field_resolver::{FieldResolver, FieldSpec};
use crate::application::sentiment;
use crate::domain::entities::news_item::Headline;
use crate::domain::entities::price_history::PriceHistory;
use crate::domain::entities::quotes::{BankQuote, Fixing, IndexQuote, PolicyRate};
use crate::domain::entities::resolved_field::ResolvedField;
use crate::domain::entities::snapshot::{
    BankRateBlock, DollarIndexBlock, FixingBlock, HistoricalBlock, MarketSnapshot,
    PolicyRateBlock, SnapshotMeta, SpotBlock,
};
use crate::domain::ports::source_client::SourceClient;
use crate::domain::values::label::Label;
use crate::domain::values::wib::wib_clock;

/// Headlines kept in the snapshot.
pub const MAX_NEWS: usize = 5;

/// Every logical field's resolution spec for one run.
pub struct FieldCatalog {
    pub history: FieldSpec<PriceHistory>,
    pub bank_rate: FieldSpec<BankQuote>,
    pub official_fixing: FieldSpec<Fixing>,
    pub dollar_index: FieldSpec<IndexQuote>,
    pub policy_rate: FieldSpec<PolicyRate>,
    pub news: FieldSpec<Vec<Headline>>,
}

/// Outcome of resolving every field of a [`FieldCatalog`].
#[derive(Debug, Clone)]
pub struct ResolvedFields {
    pub history: ResolvedField<PriceHistory>,
    pub bank_rate: ResolvedField<BankQuote>,
    pub official_fixing: ResolvedField<Fixing>,
    pub dollar_index: ResolvedField<IndexQuote>,
    pub policy_rate: ResolvedField<PolicyRate>,
    pub news: ResolvedField<Vec<Headline>>,
}

pub struct Aggregator {
    resolver: FieldResolver,
}

impl Aggregator {
    pub fn new(client: Arc<dyn SourceClient>) -> Self {
        Self {
            resolver: FieldResolver::new(client),
        }
    }

    /// Resolve each field in turn and build the snapshot. Never fails:
    /// unresolved fields degrade to their fallback labels.
    pub async fn run(&self, catalog: FieldCatalog, as_of: NaiveDate) -> MarketSnapshot {
        info!(%as_of, "building market snapshot");
        let fields = ResolvedFields {
            history: self.resolver.resolve(catalog.history).await,
            bank_rate: self.resolver.resolve(catalog.bank_rate).await,
            official_fixing: self.resolver.resolve(catalog.official_fixing).await,
            dollar_index: self.resolver.resolve(catalog.dollar_index).await,
            policy_rate: self.resolver.resolve(catalog.policy_rate).await,
            news: self.resolver.resolve(catalog.news).await,
        };
        let snapshot = assemble(as_of, Utc::now(), fields);
        info!(
            spot = ?snapshot.spot.value,
            spot_label = %snapshot.spot.label,
            points = snapshot.historical.prices.len(),
            news = snapshot.news.len(),
            "snapshot ready"
        );
        snapshot
    }
}

/// Merge resolved fields and analytics into the output record.
pub fn assemble(
    as_of: NaiveDate,
    generated_at: DateTime<Utc>,
    fields: ResolvedFields,
) -> MarketSnapshot {
    let history_label = fields.history.label();
    let history_source = fields.history.source().to_string();
    let history = fields.history.into_value().unwrap_or_default();
    let closes = history.closes();
    let last_close = history.last().map(|p| p.close);

    let spot = match fields.bank_rate.value() {
        Some(quote) if fields.bank_rate.is_live() => SpotBlock {
            value: Some(quote.mid),
            change_pct: change_pct(&closes),
            label: Label::Live,
            source: fields.bank_rate.source().to_string(),
        },
        _ => SpotBlock {
            value: last_close,
            change_pct: change_pct(&closes),
            label: history_label,
            source: history_source,
        },
    };

    let range = range_stats(&closes);
    let volatility = volatility_proxy(&closes);
    let historical = HistoricalBlock {
        dates: history.dates(),
        prices: closes.clone(),
        ma5: moving_average(&closes, 5),
        ma20: moving_average(&closes, 20),
        range_30d_low: range.map(|r| r.low),
        range_30d_high: range.map(|r| r.high),
        avg_30d: range.map(|r| r.avg),
        label: history_label,
    };

    let mut headlines = fields.news.into_value().unwrap_or_default();
    headlines.truncate(MAX_NEWS);
    let news = sentiment::classify_all(headlines);
    let sentiment_themes = sentiment::synthesize_themes(&news);
    let sentiment_dist = sentiment::sentiment_distribution(&news);

    MarketSnapshot {
        meta: SnapshotMeta {
            date: as_of,
            generated_at,
            generated_at_wib: wib_clock(generated_at),
        },
        spot,
        bank_rate: bank_rate_block(fields.bank_rate),
        official_fixing: fixing_block(fields.official_fixing),
        dollar_index: dollar_index_block(fields.dollar_index),
        policy_rate: policy_rate_block(fields.policy_rate),
        historical,
        news,
        sentiment_themes,
        volatility,
        sentiment_dist,
    }
}

fn bank_rate_block(field: ResolvedField<BankQuote>) -> BankRateBlock {
    let label = field.label();
    let source = field.source().to_string();
    let error = field.error().map(String::from);
    let quote = field.into_value();
    BankRateBlock {
        buy: quote.as_ref().map(|q| q.buy),
        sell: quote.as_ref().map(|q| q.sell),
        mid: quote.as_ref().map(|q| q.mid),
        timestamp: quote.map(|q| q.timestamp),
        label,
        source,
        error,
    }
}

fn fixing_block(field: ResolvedField<Fixing>) -> FixingBlock {
    let label = field.label();
    let source = field.source().to_string();
    let error = field.error().map(String::from);
    let fixing = field.into_value();
    FixingBlock {
        rate: fixing.as_ref().map(|f| f.rate),
        date: fixing.map(|f| f.date),
        label,
        source,
        error,
    }
}

fn dollar_index_block(field: ResolvedField<IndexQuote>) -> DollarIndexBlock {
    DollarIndexBlock {
        value: field.value().map(|q| q.value),
        change_pct: field.value().and_then(|q| q.change_pct),
        label: field.label(),
        source: field.source().to_string(),
        error: field.error().map(String::from),
    }
}

fn policy_rate_block(field: ResolvedField<PolicyRate>) -> PolicyRateBlock {
    PolicyRateBlock {
        rate: field.value().map(|p| p.rate),
        decision: field.value().and_then(|p| p.decision.clone()),
        label: field.label(),
        source: field.source().to_string(),
        error: field.error().map(String::from),
    }
}
