//! Custom error types for reimburse-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::notification::Notification;

/// Message shown when a row removal would leave the ledger empty
pub const LAST_ROW_MESSAGE: &str = "At least one row must remain";

/// Message shown when a form is submitted with required fields left blank
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// The main error type for reimburse-cli operations
#[derive(Error, Debug)]
pub enum ReimburseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for forms and requests
    #[error("Validation error: {0}")]
    Validation(String),

    /// Required top-level form fields are blank
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,

    /// Removing the row would leave the ledger empty
    #[error("{}", LAST_ROW_MESSAGE)]
    LastRow,

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A request status change that the review workflow does not allow
    #[error("Cannot {action} a request that is already {status}")]
    InvalidTransition {
        action: &'static str,
        status: String,
    },

    /// Draft file errors
    #[error("Draft error: {0}")]
    Draft(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ReimburseError {
    /// Create a "not found" error for requests
    pub fn request_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Request",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::MissingFields | Self::LastRow
        )
    }

    /// Render the error as a user-facing notification
    ///
    /// Validation problems are warnings the user can fix in place; anything
    /// else is reported as an error.
    pub fn to_notification(&self) -> Notification {
        match self {
            Self::LastRow => Notification::warning("Cannot Remove Row", LAST_ROW_MESSAGE),
            Self::MissingFields => {
                Notification::warning("Missing Information", MISSING_FIELDS_MESSAGE)
            }
            Self::Validation(msg) => Notification::warning("Invalid Information", msg.clone()),
            Self::InvalidTransition { .. } => {
                Notification::warning("Request Already Reviewed", self.to_string())
            }
            Self::NotFound { .. } => Notification::error("Not Found", self.to_string()),
            _ => Notification::error("Error", self.to_string()),
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ReimburseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReimburseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ReimburseError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for reimburse-cli operations
pub type ReimburseResult<T> = Result<T, ReimburseError>;
