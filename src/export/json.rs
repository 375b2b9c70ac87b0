//! JSON export functionality
//!
//! Exports requests with schema versioning, and reads such exports back so
//! the review board can be started from a file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ReimburseError, ReimburseResult};
use crate::models::{Money, Request};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestsExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All requests
    pub requests: Vec<Request>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of requests
    pub request_count: usize,

    /// Requests still waiting for review
    pub pending_count: usize,

    /// Total number of ledger entries across all requests
    pub entry_count: usize,

    /// Sum of all request totals
    pub total_amount: Money,
}

impl RequestsExport {
    /// Build an export of the given requests
    pub fn new(requests: Vec<Request>) -> Self {
        let metadata = ExportMetadata {
            request_count: requests.len(),
            pending_count: requests.iter().filter(|r| r.is_pending()).count(),
            entry_count: requests.iter().map(|r| r.ledger.len()).sum(),
            total_amount: requests.iter().map(Request::total).sum(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            requests,
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for request in &self.requests {
            if !seen.insert(request.id) {
                return Err(format!("Duplicate request id {}", request.id));
            }
        }

        Ok(())
    }
}

/// Export requests to JSON
pub fn export_requests_json<W: Write>(
    requests: &[Request],
    writer: &mut W,
    pretty: bool,
) -> ReimburseResult<()> {
    let export = RequestsExport::new(requests.to_vec());

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ReimburseError::Export(e.to_string()))?;

    Ok(())
}

/// Read requests from JSON
///
/// Accepts a full export or a bare array of requests.
pub fn import_requests_json(json_str: &str) -> ReimburseResult<Vec<Request>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Input {
        Export(RequestsExport),
        Requests(Vec<Request>),
    }

    match serde_json::from_str(json_str)? {
        Input::Export(export) => {
            export.validate().map_err(ReimburseError::Validation)?;
            Ok(export.requests)
        }
        Input::Requests(requests) => Ok(requests),
    }
}
