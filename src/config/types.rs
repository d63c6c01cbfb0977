use serde::Deserialize;

/// Category result pages scraped when no configuration file is supplied
const DEFAULT_CATEGORIES: &[&str] = &[
    "https://www.olx.uz/transport/legkoye-avtomobili/currency-UZS/",
    "https://www.olx.uz/transport/mototsikly/",
    "https://www.olx.uz/transport/gruzoviki/",
    "https://www.olx.uz/transport/spetstehnika/",
    "https://www.olx.uz/transport/pritsepy/",
    "https://www.olx.uz/transport/vodnyy-transport/",
];

/// Main configuration structure for Olx-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub scraper: ScraperConfig,
    pub output: OutputConfig,
}

/// Target site and category catalog
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Origin used to absolutize relative listing links
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Category result pages, scraped in declaration order
    pub categories: Vec<String>,
}

/// Scraper pacing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Pause after each processed category (seconds)
    #[serde(rename = "category-delay-secs")]
    pub category_delay_secs: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV results file
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

impl Default for Config {
    /// Built-in configuration carrying the fixed olx.uz transport catalog.
    fn default() -> Self {
        Self {
            site: SiteConfig {
                base_url: "https://www.olx.uz".to_string(),
                categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            },
            scraper: ScraperConfig {
                request_timeout_secs: 10,
                category_delay_secs: 3,
            },
            output: OutputConfig {
                csv_path: "transport_data.csv".to_string(),
            },
        }
    }
}
