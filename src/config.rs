//! Run configuration, read once from the environment (and `.env`).

use crate::domain::error::DomainError;
use crate::domain::values::wib::today_wib;
use crate::infrastructure::http::client::DEFAULT_USER_AGENT;
use chrono::NaiveDate;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "data/market_data.json";

#[derive(Debug, Clone, PartialEq)]
pub struct RadarConfig {
    /// Snapshot date; defaults to today in Jakarta (UTC+7).
    pub run_date: NaiveDate,
    /// Presence is the only check made; providers needing it are skipped without it.
    pub news_api_key: Option<String>,
    pub output_path: PathBuf,
    pub user_agent: String,
}

impl RadarConfig {
    /// Reads `NEWS_API_KEY`, `DATE_OVERRIDE`, `RADAR_OUTPUT` and
    /// `RADAR_USER_AGENT`. Empty values count as unset.
    pub fn from_env() -> Result<Self, DomainError> {
        dotenvy::dotenv().ok();
        let var = |key: &str| {
            std::env::var(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let run_date = match var("DATE_OVERRIDE") {
            Some(s) => parse_run_date(&s)?,
            None => today_wib(),
        };

        Ok(Self {
            run_date,
            news_api_key: var("NEWS_API_KEY"),
            output_path: var("RADAR_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            user_agent: var("RADAR_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.into()),
        })
    }

    /// Defaults with no credentials, for the given date.
    pub fn for_date(run_date: NaiveDate) -> Self {
        Self {
            run_date,
            news_api_key: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

pub fn parse_run_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        DomainError::InvalidInput(format!("Invalid date: {s}. Use YYYY-MM-DD"))
    })
}
