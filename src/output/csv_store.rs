//! CSV persistence for ad records

use crate::scrape::AdRecord;
use std::path::Path;
use thiserror::Error;

/// Column header row, fixed order
pub const CSV_HEADER: [&str; 4] = ["Item", "Cost", "Link", "Place and Time"];

/// Errors that can occur while writing the results file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializes one category's records to `path`
///
/// The file is fully overwritten on every call, header row included; rows
/// keep the input order. An empty record set logs a warning and leaves any
/// existing file untouched.
///
/// # Arguments
///
/// * `records` - The category's extracted records
/// * `section` - Section label used for log messages
/// * `path` - Destination of the results file
pub fn store_records(records: &[AdRecord], section: &str, path: &Path) -> Result<(), StoreError> {
    if records.is_empty() {
        tracing::warn!("No items to store for {}", section);
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.item.as_str(),
            record.cost.as_str(),
            record.link.as_str(),
            record.place_and_time.as_str(),
        ])?;
    }
    writer.flush()?;

    tracing::info!("Saved data to {}", path.display());
    Ok(())
}
