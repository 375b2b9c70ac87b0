//! Export module for reimburse-cli
//!
//! Writes requests out in several formats:
//! - CSV: one line per ledger entry (spreadsheet-compatible)
//! - JSON: machine-readable, and readable back by the review board
//! - YAML: human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_requests_csv;
pub use self::json::{
    export_requests_json, import_requests_json, RequestsExport, EXPORT_SCHEMA_VERSION,
};
pub use self::yaml::export_requests_yaml;
