pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::aggregator::{Aggregator, FieldCatalog};
use crate::application::market_calendar::{self, MarketStatus};
use crate::config::RadarConfig;
use crate::domain::entities::snapshot::MarketSnapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::source_client::SourceClient;
use crate::infrastructure::http::client::HttpSourceClient;
use crate::infrastructure::output::json_file;
use crate::infrastructure::sources::catalog::default_catalog;
use std::path::Path;
use std::sync::Arc;

pub struct IdrRadar {
    config: RadarConfig,
    aggregator: Aggregator,
}

impl IdrRadar {
    pub fn new(config: RadarConfig) -> Result<Self, DomainError> {
        let client: Arc<dyn SourceClient> = Arc::new(HttpSourceClient::new(&config.user_agent)?);
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: RadarConfig, client: Arc<dyn SourceClient>) -> Self {
        Self {
            config,
            aggregator: Aggregator::new(client),
        }
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    /// The production field catalog for this run's date and credentials.
    pub fn catalog(&self) -> FieldCatalog {
        default_catalog(&self.config)
    }

    /// Fetch every field and build the run's snapshot. Always succeeds;
    /// failures show up as labels and `error` strings inside the record.
    pub async fn snapshot(&self) -> MarketSnapshot {
        self.aggregator
            .run(self.catalog(), self.config.run_date)
            .await
    }

    pub async fn snapshot_with(&self, catalog: FieldCatalog) -> MarketSnapshot {
        self.aggregator.run(catalog, self.config.run_date).await
    }

    pub fn write_snapshot(&self, snapshot: &MarketSnapshot, path: &Path) -> Result<(), DomainError> {
        json_file::write_snapshot(snapshot, path)
    }

    pub fn market_status(&self) -> MarketStatus {
        market_calendar::market_status(self.config.run_date)
    }
}
