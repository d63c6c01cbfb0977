//! Scraping module for category fetching and ad extraction
//!
//! This module contains the core pipeline logic, including:
//! - HTTP fetching of category result pages
//! - Ad record extraction with per-field fallback
//! - Section labels derived from category URLs
//! - Sequential orchestration across the catalog

mod extractor;
mod fetcher;
mod orchestrator;
mod section;

pub use extractor::{AdRecord, ExtractError, Extractor, MISSING_FIELD};
pub use fetcher::{build_http_client, fetch_page, FetchError};
pub use orchestrator::{run_scrape, Orchestrator};
pub use section::section_name;
