//! Reimbursement request model
//!
//! Wraps a submitted ledger with the requester, the reporting period, and the
//! HR review status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RequestId;
use super::ledger::Ledger;
use super::money::Money;
use super::period::ReportingPeriod;
use super::status::ApprovalStatus;
use crate::error::{ReimburseError, ReimburseResult};

/// A requester's submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Unique identifier
    pub id: RequestId,

    /// Name of the employee asking to be reimbursed
    pub requester: String,

    /// Period the expenses cover
    pub period: ReportingPeriod,

    /// Submitted line items
    pub ledger: Ledger,

    /// Review status
    #[serde(default)]
    pub status: ApprovalStatus,

    /// When the request was submitted
    pub created_at: DateTime<Utc>,
}

impl Request {
    /// Create a new pending request
    pub fn new(requester: impl Into<String>, period: ReportingPeriod, ledger: Ledger) -> Self {
        Self {
            id: RequestId::new(),
            requester: requester.into(),
            period,
            ledger,
            status: ApprovalStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Sum of all entry balances
    pub fn total(&self) -> Money {
        self.ledger.total()
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Mark as approved; only pending requests can be decided
    pub fn approve(&mut self) -> ReimburseResult<()> {
        self.decide(ApprovalStatus::Approved, "approve")
    }

    /// Mark as denied; only pending requests can be decided
    pub fn deny(&mut self) -> ReimburseResult<()> {
        self.decide(ApprovalStatus::Denied, "deny")
    }

    fn decide(&mut self, status: ApprovalStatus, action: &'static str) -> ReimburseResult<()> {
        if !self.status.is_pending() {
            return Err(ReimburseError::InvalidTransition {
                action,
                status: self.status.as_str().to_string(),
            });
        }
        self.status = status;
        self.ledger.set_status(status);
        Ok(())
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.id,
            self.requester,
            self.period,
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::{AmountField, EntryUpdate};
    use crate::models::ids::EntryId;
    use chrono::NaiveDate;

    fn request() -> Request {
        let mut ledger = Ledger::new();
        let second = ledger.add_row();
        ledger.update(
            EntryId::new(1),
            EntryUpdate::SetAmount(AmountField::Expenses, "250".into()),
        );
        ledger.update(
            second,
            EntryUpdate::SetAmount(AmountField::Expenses, "125.50".into()),
        );
        let period = ReportingPeriod::range(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
        .unwrap();
        Request::new("Sarah Williams", period, ledger)
    }

    #[test]
    fn test_new_request_is_pending() {
        let r = request();
        assert!(r.is_pending());
        assert_eq!(r.total(), Money::from_cents(37550));
    }

    #[test]
    fn test_approve() {
        let mut r = request();
        r.approve().unwrap();
        assert_eq!(r.status, ApprovalStatus::Approved);
        assert!(r
            .ledger
            .entries()
            .iter()
            .all(|e| e.status() == ApprovalStatus::Approved));
    }

    #[test]
    fn test_decision_is_final() {
        let mut r = request();
        r.deny().unwrap();
        let err = r.approve().unwrap_err();
        assert!(matches!(err, ReimburseError::InvalidTransition { .. }));
        assert_eq!(r.status, ApprovalStatus::Denied);
    }

    #[test]
    fn test_serialization() {
        let r = request();
        let json = serde_json::to_string(&r).unwrap();
        let back: Request = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
        assert_eq!(back.total(), Money::from_cents(37550));
    }
}
