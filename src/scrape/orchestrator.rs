//! Batch orchestration across the category catalog
//!
//! This module drives the full fetch → extract → store pipeline:
//! - Categories are processed strictly in declaration order, one at a time
//! - A failed fetch skips its category; the run always reaches the last URL
//! - A fixed pause follows every category whose page was retrieved

use crate::config::Config;
use crate::output::store_records;
use crate::scrape::extractor::Extractor;
use crate::scrape::fetcher::{build_http_client, fetch_page};
use crate::scrape::section::section_name;
use crate::HarvestError;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Sequential driver for one harvesting run
pub struct Orchestrator {
    config: Config,
    client: Client,
    extractor: Extractor,
}

impl Orchestrator {
    /// Creates an orchestrator from a validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Orchestrator)` - Client built and selectors compiled
    /// * `Err(HarvestError)` - Failed to initialize
    pub fn new(config: Config) -> Result<Self, HarvestError> {
        let timeout = Duration::from_secs(config.scraper.request_timeout_secs);
        let client = build_http_client(timeout)?;
        let extractor = Extractor::new(&config.site.base_url)?;

        Ok(Self {
            config,
            client,
            extractor,
        })
    }

    /// Runs one full pass over the category catalog
    ///
    /// Per-category failures are logged and contained; completion of the
    /// pass is the only outcome.
    pub async fn run(&self) {
        tracing::info!("Beginning {} data collection...", self.config.site.base_url);

        for url in &self.config.site.categories {
            self.process_category(url).await;
        }

        tracing::info!("Data collection finished.");
    }

    /// Fetch → extract → store for one category, then pause
    ///
    /// The pause applies only after a category whose page was retrieved; a
    /// failed fetch moves straight on to the next URL.
    async fn process_category(&self, url: &str) {
        let document = match fetch_page(&self.client, url).await {
            Ok(document) => document,
            Err(error) => {
                tracing::error!("{}", error);
                return;
            }
        };

        let section = section_name(url);
        tracing::info!("Processing section: {}", section);

        let records = self.extractor.extract(&document, section);
        let path = Path::new(&self.config.output.csv_path);
        if let Err(error) = store_records(&records, section, path) {
            tracing::error!("Could not save data for {}: {}", section, error);
        }

        tokio::time::sleep(Duration::from_secs(self.config.scraper.category_delay_secs)).await;
    }
}

/// Runs the full batch with a freshly built client and extractor
///
/// # Arguments
///
/// * `config` - The harvester configuration
///
/// # Returns
///
/// * `Ok(())` - The pass over the catalog completed
/// * `Err(HarvestError)` - Failed to initialize the client or extractor
pub async fn run_scrape(config: Config) -> Result<(), HarvestError> {
    let orchestrator = Orchestrator::new(config)?;
    orchestrator.run().await;
    Ok(())
}
