//! Output module for persisting harvested records
//!
//! This module handles serializing one category's ad records to the
//! tabular results file.

mod csv_store;

pub use csv_store::{store_records, StoreError, CSV_HEADER};
