//! Approval status shared by requests and their line items

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a request (or one of its entries) stands in HR review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// Waiting for an HR decision
    #[default]
    Pending,
    /// Accepted for reimbursement
    Approved,
    /// Rejected
    Denied,
}

impl ApprovalStatus {
    /// Check whether a decision can still be made
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Lowercase name as used in files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Denied => "denied",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Approved => write!(f, "Approved"),
            Self::Denied => write!(f, "Denied"),
        }
    }
}

impl FromStr for ApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "denied" => Ok(Self::Denied),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}
