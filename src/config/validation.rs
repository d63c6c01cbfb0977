use crate::config::types::{Config, OutputConfig, ScraperConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_scraper_config(&config.scraper)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the target site and category catalog
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use an HTTP(S) scheme, got '{}'",
            base.scheme()
        )));
    }

    if base.host_str().is_none() {
        return Err(ConfigError::Validation(
            "base-url must have a host".to_string(),
        ));
    }

    if config.categories.is_empty() {
        return Err(ConfigError::Validation(
            "at least one category URL is required".to_string(),
        ));
    }

    for category in &config.categories {
        let url = Url::parse(category).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid category URL '{}': {}", category, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "Category URL '{}' must use an HTTP(S) scheme",
                category
            )));
        }
    }

    Ok(())
}

/// Validates scraper pacing configuration
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    // category_delay_secs may be zero; a zero delay is valid pacing

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_malformed_base_url() {
        let mut config = Config::default();
        config.site.base_url = "not a url".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = Config::default();
        config.site.base_url = "ftp://www.olx.uz".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let mut config = Config::default();
        config.site.categories.clear();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_rejects_malformed_category_url() {
        let mut config = Config::default();
        config.site.categories.push("::broken::".to_string());
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = Config::default();
        config.scraper.request_timeout_secs = 0;
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_allows_zero_delay() {
        let mut config = Config::default();
        config.scraper.category_delay_secs = 0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_empty_csv_path() {
        let mut config = Config::default();
        config.output.csv_path = String::new();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }
}
