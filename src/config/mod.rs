//! Configuration module for Olx-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, with a built-in default carrying the fixed transport catalog.
//!
//! # Example
//!
//! ```no_run
//! use olx_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Categories: {}", config.site.categories.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, ScraperConfig, SiteConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
