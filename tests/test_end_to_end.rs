//! End-to-end runs of the production field catalog against canned provider
//! payloads: fetch → resolve → analytics → snapshot → JSON.

mod common;

use common::*;
use idr_radar::config::RadarConfig;
use idr_radar::domain::error::{DomainError, SourceError};
use idr_radar::domain::ports::source_client::RawPayload;
use idr_radar::domain::values::classification::Classification;
use idr_radar::domain::values::label::Label;
use idr_radar::IdrRadar;
use std::sync::Arc;

/// 28 rising closes followed by 16000 and 16050.
fn thirty_closes() -> Vec<f64> {
    let mut closes: Vec<f64> = (0..28).map(|i| 15700.0 + 10.0 * i as f64).collect();
    closes.extend([16000.0, 16050.0]);
    closes
}

fn healthy_client() -> StubClient {
    StubClient::new()
        .provider("frankfurter", Ok(frankfurter_payload(&thirty_closes())))
        .provider("bca", Ok(bca_page("16.245,00", "16.265,00")))
        .provider("bank_indonesia", Ok(jisdor_page("16.251,00")))
        .provider("yahoo", Ok(yahoo_chart(&[99.0, 99.5])))
        .route(
            is_policy_search,
            Ok(newsapi_articles(&["BI pertahankan suku bunga 4,75%"])),
        )
        .route(
            is_news_search,
            Ok(newsapi_articles(&[
                "Rupiah melemah tertekan dolar",
                "Rupiah anjlok ke level terendah",
                "Defisit transaksi berjalan melebar",
                "Rupiah menguat di pasar spot",
                "Jadwal lelang SBN pekan ini",
            ])),
        )
}

#[tokio::test]
async fn test_full_pipeline_all_sources_live() {
    let client = Arc::new(healthy_client());
    let radar = radar(client.clone(), Some("key"));

    let snapshot = radar.snapshot().await;

    assert_eq!(snapshot.meta.date, run_date());

    // Live bank rate wins the headline spot value
    assert_eq!(snapshot.spot.value, Some(16255.0));
    assert_eq!(snapshot.spot.label, Label::Live);
    assert_eq!(snapshot.spot.source, "bca.co.id");
    assert_eq!(snapshot.spot.change_pct, Some(0.312));

    assert_eq!(snapshot.bank_rate.buy, Some(16245.0));
    assert_eq!(snapshot.bank_rate.sell, Some(16265.0));
    assert_eq!(snapshot.bank_rate.label, Label::Live);

    assert_eq!(snapshot.official_fixing.rate, Some(16251.0));
    assert_eq!(snapshot.official_fixing.date.as_deref(), Some("17 Oktober 2026"));
    assert_eq!(snapshot.official_fixing.label, Label::Live);

    assert_eq!(snapshot.dollar_index.value, Some(99.5));
    assert_eq!(snapshot.dollar_index.change_pct, Some(0.505));
    assert_eq!(snapshot.dollar_index.label, Label::Live);

    assert_eq!(snapshot.policy_rate.rate, Some(4.75));
    assert_eq!(snapshot.policy_rate.label, Label::Live);
    assert!(snapshot.policy_rate.decision.is_none());

    assert_eq!(snapshot.historical.prices.len(), 30);
    assert_eq!(snapshot.historical.label, Label::Live);
    assert_eq!(snapshot.historical.range_30d_low, Some(15700.0));
    assert_eq!(snapshot.historical.range_30d_high, Some(16050.0));
    assert!(snapshot.historical.ma5[3].is_none());
    assert!(snapshot.historical.ma5[4].is_some());
    assert!(snapshot.historical.ma20[18].is_none());
    assert!(snapshot.historical.ma20[19].is_some());

    assert_eq!(snapshot.news.len(), 5);
    assert_eq!(snapshot.news[0].source, "Kontan");
    assert_eq!(snapshot.news[0].datetime, "2026-10-18 09:30");
    assert_eq!(snapshot.news[0].classification, Classification::BearishIdr);

    assert_eq!(snapshot.sentiment_dist.bearish_pct, 60);
    assert_eq!(snapshot.sentiment_dist.bullish_pct, 20);
    assert_eq!(snapshot.sentiment_dist.neutral_pct, 20);

    assert_eq!(snapshot.sentiment_themes.len(), 4);
    assert_eq!(snapshot.sentiment_themes[0].tag, "#RupiahMelemah");
    assert!(snapshot.sentiment_themes.iter().all(|t| t.is_proxy));

    assert!(snapshot.volatility.atr.is_some());
    assert_eq!(snapshot.volatility.label, Label::Proxy);

    // Five headlines from the first query; the later queries are never sent
    let news_calls = client.calls().iter().filter(|c| *c == "newsapi").count();
    assert_eq!(news_calls, 2, "one policy search plus one headline search");
}

#[tokio::test]
async fn test_spot_change_pct_from_history() {
    let client = Arc::new(
        StubClient::new().provider("frankfurter", Ok(frankfurter_payload(&thirty_closes()))),
    );
    let snapshot = radar(client, None).snapshot().await;

    // Bank rate failed, so spot falls back to the last close
    assert_eq!(snapshot.spot.value, Some(16050.0));
    assert_eq!(snapshot.spot.change_pct, Some(0.312));
    assert_eq!(snapshot.spot.label, Label::Live);
    assert_eq!(snapshot.spot.source, "frankfurter.app");
}

#[tokio::test]
async fn test_bank_rate_failure_is_null_proxy() {
    let client = Arc::new(
        StubClient::new()
            .provider("bca", Err(SourceError::Network("bca returned 503".into())))
            .provider("frankfurter", Ok(frankfurter_payload(&thirty_closes()))),
    );
    let snapshot = radar(client, None).snapshot().await;

    assert!(snapshot.bank_rate.buy.is_none());
    assert!(snapshot.bank_rate.sell.is_none());
    assert!(snapshot.bank_rate.mid.is_none());
    assert_eq!(snapshot.bank_rate.label, Label::Proxy);
    assert!(snapshot
        .bank_rate
        .error
        .as_deref()
        .is_some_and(|e| e.contains("503")));
    assert_eq!(snapshot.spot.source, "frankfurter.app");
}

#[tokio::test]
async fn test_short_history_has_no_volatility() {
    let closes: Vec<f64> = (0..10).map(|i| 16000.0 + i as f64).collect();
    let client =
        Arc::new(StubClient::new().provider("frankfurter", Ok(frankfurter_payload(&closes))));
    let snapshot = radar(client, None).snapshot().await;

    assert_eq!(snapshot.historical.prices.len(), 10);
    assert!(snapshot.volatility.atr.is_none());
    assert!(snapshot.volatility.atr_pct.is_none());
    assert!(snapshot.volatility.interpretation.is_none());
    assert_eq!(snapshot.volatility.label, Label::Proxy);
    assert!(snapshot.historical.ma20.iter().all(Option::is_none));
}

#[tokio::test]
async fn test_history_falls_back_to_yahoo() {
    let client = Arc::new(
        StubClient::new()
            .provider("frankfurter", Err(SourceError::Network("timeout".into())))
            .route(
                |r| r.provider == "yahoo" && r.url.ends_with("IDR=X"),
                Ok(yahoo_chart(&[16300.0, 16320.0, 16310.0])),
            ),
    );
    let snapshot = radar(client, None).snapshot().await;

    assert_eq!(snapshot.historical.prices, vec![16300.0, 16320.0, 16310.0]);
    assert_eq!(snapshot.historical.label, Label::Proxy);
    assert_eq!(snapshot.spot.value, Some(16310.0));
    assert_eq!(snapshot.spot.label, Label::Proxy);
    assert_eq!(snapshot.spot.source, "Yahoo Finance");
}

#[tokio::test]
async fn test_dollar_index_falls_back_to_marketwatch() {
    let client = Arc::new(StubClient::new().provider(
        "marketwatch",
        Ok(RawPayload::Text(
            r#"<bg-quote field="Last">98.76</bg-quote>"#.into(),
        )),
    ));
    let snapshot = radar(client, None).snapshot().await;

    assert_eq!(snapshot.dollar_index.value, Some(98.76));
    assert!(snapshot.dollar_index.change_pct.is_none());
    assert_eq!(snapshot.dollar_index.label, Label::Proxy);
    assert_eq!(snapshot.dollar_index.source, "MarketWatch");
}

#[tokio::test]
async fn test_news_without_key_uses_cnbc() {
    let client = Arc::new(StubClient::new().provider(
        "cnbc_indonesia",
        Ok(cnbc_page(&["Rupiah menguat tipis", "IHSG dibuka naik"])),
    ));
    let snapshot = radar(client.clone(), None).snapshot().await;

    assert_eq!(snapshot.news.len(), 2);
    assert_eq!(snapshot.news[0].source, "CNBCIndonesia");
    assert_eq!(snapshot.news[0].datetime, "2026-10-19");
    assert_eq!(snapshot.sentiment_themes[0].tag, "#RupiahMenguat");
    assert!(
        !client.calls().iter().any(|c| c == "newsapi"),
        "NewsAPI must not be called without a key"
    );
}

#[tokio::test]
async fn test_everything_down_still_produces_snapshot() {
    let client = Arc::new(StubClient::new());
    let snapshot = radar(client, Some("key")).snapshot().await;

    assert!(snapshot.spot.value.is_none());
    assert_eq!(snapshot.spot.label, Label::Stale);
    assert!(snapshot.spot.change_pct.is_none());
    assert!(snapshot.historical.prices.is_empty());
    assert!(snapshot.historical.avg_30d.is_none());
    assert_eq!(snapshot.historical.label, Label::Stale);

    assert_eq!(snapshot.bank_rate.label, Label::Proxy);
    assert_eq!(snapshot.official_fixing.label, Label::Proxy);
    assert!(snapshot.official_fixing.rate.is_none());
    assert_eq!(snapshot.dollar_index.label, Label::Stale);
    assert!(snapshot.dollar_index.value.is_none());

    assert_eq!(snapshot.policy_rate.rate, Some(4.75));
    assert_eq!(snapshot.policy_rate.decision.as_deref(), Some("Hold"));
    assert_eq!(snapshot.policy_rate.label, Label::Stale);
    assert_eq!(snapshot.policy_rate.source, "Known value");

    assert!(snapshot.news.is_empty());
    assert_eq!(snapshot.sentiment_dist.bullish_pct, 0);
    assert_eq!(snapshot.sentiment_dist.bearish_pct, 0);
    assert_eq!(snapshot.sentiment_dist.neutral_pct, 0);
    assert_eq!(snapshot.sentiment_themes.len(), 4);
    assert!(snapshot.volatility.atr.is_none());
}

#[tokio::test]
async fn test_implausible_policy_rate_falls_to_known_value() {
    let client = Arc::new(StubClient::new().route(
        is_policy_search,
        Ok(newsapi_articles(&["Inflasi inti 12,5% di luar dugaan"])),
    ));
    let snapshot = radar(client, Some("key")).snapshot().await;

    assert_eq!(snapshot.policy_rate.rate, Some(4.75));
    assert_eq!(snapshot.policy_rate.label, Label::Stale);
}

#[tokio::test]
async fn test_json_field_order() {
    let client = Arc::new(healthy_client());
    let snapshot = radar(client, Some("key")).snapshot().await;

    let json = serde_json::to_string(&snapshot).unwrap();
    let keys = [
        "\"meta\"",
        "\"spot\"",
        "\"bank_rate\"",
        "\"official_fixing\"",
        "\"dollar_index\"",
        "\"policy_rate\"",
        "\"historical\"",
        "\"news\"",
        "\"sentiment_themes\"",
        "\"volatility\"",
        "\"sentiment_dist\"",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["spot"]["label"], "LIVE");
    assert_eq!(value["news"][0]["classification"], "BEARISH_IDR");
    assert_eq!(value["historical"]["dates"][0], "2026-09-20");
    assert!(value["historical"]["ma5"][0].is_null());
}

#[tokio::test]
async fn test_write_snapshot_to_file() {
    let client = Arc::new(healthy_client());
    let radar = radar(client, Some("key"));
    let snapshot = radar.snapshot().await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("market_data.json");
    radar.write_snapshot(&snapshot, &path).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["meta"]["date"], "2026-10-19");
    assert_eq!(written["policy_rate"]["rate"], 4.75);
}

#[test]
fn test_unusable_user_agent_is_reported() {
    let mut config = RadarConfig::for_date(run_date());
    config.user_agent = "radar\nagent".into();
    assert!(matches!(
        IdrRadar::new(config),
        Err(DomainError::Source(SourceError::Config(_)))
    ));
}
