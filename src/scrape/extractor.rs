//! Ad extraction from parsed category pages
//!
//! This module turns a category result document into structured ad records:
//! - Listing cards are located with a fixed structural selector
//! - The four target fields are looked up independently per card
//! - A field that cannot be extracted resolves to a sentinel, never an error
//! - One malformed card is skipped without aborting its category

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use url::Url;

/// Placeholder stored when a listing field cannot be extracted
pub const MISSING_FIELD: &str = "N/A";

/// One extracted classified-ad listing
///
/// Invariant: every field holds either trimmed extracted text or
/// [`MISSING_FIELD`], never an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdRecord {
    /// Listing title
    pub item: String,

    /// Raw displayed price text (unparsed, may include currency)
    pub cost: String,

    /// Absolute URL of the listing
    pub link: String,

    /// Combined location and posting-time text
    pub place_and_time: String,
}

/// Errors produced while building the extractor or a single record
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid base URL '{url}': {source}")]
    BaseUrl { url: String, source: url::ParseError },

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

/// Extracts ad records from category result pages
///
/// Selectors are compiled once at construction. Field lookups are plain
/// `Option`s resolved to the sentinel; no control-flow object is allocated
/// for a selector miss.
pub struct Extractor {
    base: Url,
    card: Selector,
    title: Selector,
    price: Selector,
    anchor: Selector,
    location_date: Selector,
}

impl Extractor {
    /// Creates an extractor that absolutizes relative links against `base`
    ///
    /// # Arguments
    ///
    /// * `base` - The site origin, e.g. `https://www.olx.uz`
    pub fn new(base: &str) -> Result<Self, ExtractError> {
        let base = Url::parse(base).map_err(|source| ExtractError::BaseUrl {
            url: base.to_string(),
            source,
        })?;

        Ok(Self {
            base,
            card: parse_selector(r#"div[data-cy="l-card"]"#)?,
            title: parse_selector("h4")?,
            price: parse_selector(r#"p[data-testid="ad-price"]"#)?,
            anchor: parse_selector("a")?,
            location_date: parse_selector(r#"p[data-testid="location-date"]"#)?,
        })
    }

    /// Collects all ad records from `document`, in document order
    ///
    /// A card that fails to build is logged against `section` and skipped;
    /// one bad listing never aborts its category. A document without
    /// listing cards yields an empty vector.
    pub fn extract(&self, document: &Html, section: &str) -> Vec<AdRecord> {
        let mut records = Vec::new();

        for card in document.select(&self.card) {
            match self.record_from_card(card) {
                Ok(record) => records.push(record),
                Err(error) => {
                    tracing::warn!("Issue with ad in {}: {}", section, error);
                }
            }
        }

        tracing::info!("Collected {} items from {}", records.len(), section);
        records
    }

    /// Builds one record from a listing card
    ///
    /// Field misses resolve to the sentinel independently; an `Err` is
    /// reserved for a card whose structure defeats extraction outright.
    fn record_from_card(&self, card: ElementRef<'_>) -> Result<AdRecord, ExtractError> {
        let item = self.first_text(card, &self.title);
        let cost = self.first_text(card, &self.price);
        let place_and_time = self.first_text(card, &self.location_date);

        let link = match card
            .select(&self.anchor)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
        {
            Some(href) => self.absolutize(href),
            None => MISSING_FIELD.to_string(),
        };

        Ok(AdRecord {
            item,
            cost,
            link,
            place_and_time,
        })
    }

    /// First match's text, trimmed; the sentinel when nothing usable matches
    fn first_text(&self, card: ElementRef<'_>, selector: &Selector) -> String {
        card.select(selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| MISSING_FIELD.to_string())
    }

    /// Rewrites a scheme-less href against the site origin
    ///
    /// An href already carrying a full scheme passes through unchanged; one
    /// that cannot be joined resolves to the sentinel.
    fn absolutize(&self, href: &str) -> String {
        if href.starts_with("http") {
            return href.to_string();
        }

        match self.base.join(href) {
            Ok(absolute) => absolute.to_string(),
            Err(_) => MISSING_FIELD.to_string(),
        }
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
