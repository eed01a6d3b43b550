//! Per-field strategy order, plausibility rules and exhaustion values.

use super::{bank_indonesia, bca, cnbc, frankfurter, marketwatch, newsapi, yahoo};
use crate::application::aggregator::FieldCatalog;
use crate::application::field_resolver::FieldSpec;
use crate::config::RadarConfig;
use crate::domain::entities::quotes::PolicyRate;
use crate::domain::values::label::Label;

/// Last policy rate known when no article quotes one.
pub const KNOWN_POLICY_RATE: f64 = 4.75;
pub const KNOWN_POLICY_DECISION: &str = "Hold";

/// IDR per USD below this is not a real quote.
const MIN_IDR_RATE: f64 = 1000.0;

pub fn default_catalog(config: &RadarConfig) -> FieldCatalog {
    let as_of = config.run_date;
    let api_key = config.news_api_key.clone();

    FieldCatalog {
        history: FieldSpec::new("history", frankfurter::history_strategy(as_of))
            .fallback(yahoo::history_strategy(as_of))
            .plausible("at least one close, all above 1000", |h| {
                !h.is_empty() && h.points().iter().all(|p| p.close > MIN_IDR_RATE)
            }),

        bank_rate: FieldSpec::new("bank_rate", bca::rate_strategy())
            .plausible("buy and sell above 1000, buy <= sell", |q| {
                q.buy > MIN_IDR_RATE && q.sell > MIN_IDR_RATE && q.buy <= q.sell
            })
            .when_exhausted(None, Label::Proxy, "none"),

        official_fixing: FieldSpec::new("official_fixing", bank_indonesia::fixing_strategy())
            .plausible("rate above 10000", |f| f.rate > 10_000.0)
            .when_exhausted(None, Label::Proxy, "none"),

        dollar_index: FieldSpec::new("dollar_index", yahoo::dollar_index_strategy())
            .fallback(marketwatch::dxy_strategy())
            .plausible("index between 50 and 200", |q| q.value > 50.0 && q.value < 200.0),

        policy_rate: FieldSpec::new(
            "policy_rate",
            newsapi::NewsApiPolicyRate::new(api_key.clone()),
        )
        .plausible("rate between 2% and 10%", |p| {
            let (low, high) = newsapi::POLICY_RATE_BAND;
            (low..=high).contains(&p.rate)
        })
        .when_exhausted(
            Some(PolicyRate {
                rate: KNOWN_POLICY_RATE,
                decision: Some(KNOWN_POLICY_DECISION.to_string()),
            }),
            Label::Stale,
            "Known value",
        ),

        news: FieldSpec::new("news", newsapi::NewsApiHeadlines::new(api_key, as_of))
            .fallback(cnbc::headlines_strategy(as_of))
            .plausible("at least one headline", |n| !n.is_empty())
            .when_exhausted(Some(Vec::new()), Label::Stale, "none"),
    }
}
