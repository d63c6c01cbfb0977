//! Olx-Harvest main entry point
//!
//! This is the command-line interface for the Olx-Harvest batch scraper.

use clap::Parser;
use olx_harvest::config::{load_config_with_hash, Config};
use olx_harvest::scrape::{run_scrape, section_name};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Olx-Harvest: a batch listing harvester
///
/// Olx-Harvest fetches a fixed catalog of olx.uz transport category pages,
/// extracts title, price, link and location/date per listing, and writes
/// the results to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "olx-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A batch listing harvester for olx.uz transport categories", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in catalog when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((config, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    config
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using the built-in catalog");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    run_scrape(config).await?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("olx_harvest=info,warn"),
            1 => EnvFilter::new("olx_harvest=debug,info"),
            2 => EnvFilter::new("olx_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be scraped
fn handle_dry_run(config: &Config) {
    println!("=== Olx-Harvest Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);

    println!("\nPacing:");
    println!(
        "  Request timeout: {}s",
        config.scraper.request_timeout_secs
    );
    println!("  Category delay: {}s", config.scraper.category_delay_secs);

    println!("\nOutput:");
    println!("  CSV file: {}", config.output.csv_path);

    println!("\nCategories ({}):", config.site.categories.len());
    for url in &config.site.categories {
        println!("  - {} ({})", section_name(url), url);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would scrape {} categories sequentially",
        config.site.categories.len()
    );
}
