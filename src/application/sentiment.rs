//! Keyword-count news classification and the derived sentiment artifacts.

use crate::domain::entities::news_item::{Headline, NewsItem};
use crate::domain::entities::sentiment_theme::SentimentTheme;
use crate::domain::entities::snapshot::SentimentDistribution;
use crate::domain::values::classification::Classification;

/// Indonesian phrases read as supportive of the rupiah.
pub const BULLISH_KEYWORDS: &[&str] = &[
    "menguat",
    "naik",
    "apresiasi",
    "positif",
    "stabil",
    "surplus",
    "deal",
    "investasi masuk",
    "cadangan devisa",
    "beli rupiah",
];

/// Indonesian phrases read as pressure on the rupiah.
pub const BEARISH_KEYWORDS: &[&str] = &[
    "melemah",
    "turun",
    "depresiasi",
    "tekanan",
    "defisit",
    "jual",
    "anjlok",
    "rekor rendah",
    "risk off",
    "capital outflow",
];

fn keyword_hits(title_lower: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| title_lower.contains(*k)).count()
}

/// Count how many bullish and bearish keywords appear in the title
/// (case-insensitive). The larger count wins; a tie is `Neutral`.
pub fn classify_headline(title: &str) -> Classification {
    let lower = title.to_lowercase();
    let bull = keyword_hits(&lower, BULLISH_KEYWORDS);
    let bear = keyword_hits(&lower, BEARISH_KEYWORDS);
    match bull.cmp(&bear) {
        std::cmp::Ordering::Greater => Classification::BullishIdr,
        std::cmp::Ordering::Less => Classification::BearishIdr,
        std::cmp::Ordering::Equal => Classification::Neutral,
    }
}

pub fn classify_all(headlines: Vec<Headline>) -> Vec<NewsItem> {
    headlines
        .into_iter()
        .map(|h| {
            let class = classify_headline(&h.title);
            NewsItem::classified(h, class)
        })
        .collect()
}

fn count(news: &[NewsItem], class: Classification) -> usize {
    news.iter().filter(|n| n.classification == class).count()
}

fn pct(part: usize, total: usize) -> u32 {
    (part as f64 / total as f64 * 100.0).round_ties_even() as u32
}

/// Share of bullish, bearish and remaining items. An empty set is 0/0/0.
pub fn sentiment_distribution(news: &[NewsItem]) -> SentimentDistribution {
    let total = news.len().max(1);
    let bull = count(news, Classification::BullishIdr);
    let bear = count(news, Classification::BearishIdr);
    let neutral = news.len() - bull - bear;
    SentimentDistribution {
        bullish_pct: pct(bull, total),
        bearish_pct: pct(bear, total),
        neutral_pct: pct(neutral, total),
    }
}

/// Direction carried by the dominant theme. Ties go to bearish.
pub fn dominant_classification(news: &[NewsItem]) -> Classification {
    if count(news, Classification::BearishIdr) >= count(news, Classification::BullishIdr) {
        Classification::BearishIdr
    } else {
        Classification::BullishIdr
    }
}

/// Four synthetic discussion themes seeded by the news tone.
pub fn synthesize_themes(news: &[NewsItem]) -> Vec<SentimentTheme> {
    let dominant = dominant_classification(news);
    let (tag, summary) = match dominant {
        Classification::BearishIdr => (
            "#RupiahMelemah",
            "Sentimen negatif dominan — publik khawatir IDR melemah lebih lanjut.",
        ),
        _ => (
            "#RupiahMenguat",
            "Sentimen positif — publik apresiasi penguatan IDR.",
        ),
    };

    vec![
        SentimentTheme::proxy(1, tag, "High", summary, dominant),
        SentimentTheme::proxy(
            2,
            "#BIRate",
            "Moderate",
            "Diskusi soal kebijakan suku bunga BI dan dampaknya ke nilai tukar.",
            Classification::Mixed,
        ),
        SentimentTheme::proxy(
            3,
            "#kursrupiah",
            "High",
            "Update kurs harian — banyak pelaku pasar dan retail pantau level support/resistance.",
            Classification::Neutral,
        ),
        SentimentTheme::proxy(
            4,
            "#DollarRupiah",
            "Moderate",
            "Pergerakan DXY dan dampaknya ke IDR menjadi perhatian utama trader.",
            Classification::Mixed,
        ),
    ]
}
