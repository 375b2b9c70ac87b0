//! Submission of a completed form
//!
//! Checks the top-level fields and hands the form's ledger off, whole, into
//! a pending [`Request`]. A refused submission leaves the form untouched.

use crate::error::{ReimburseError, ReimburseResult};
use crate::models::{ApprovalStatus, ReportingPeriod, Request};
use crate::notification::Notification;
use crate::services::form::{FormMode, FormSession};

/// Description shown after any successful submission
pub const PROCESSED_MESSAGE: &str = "Your reimbursement request has been processed successfully.";

/// Result of a successful submission
#[derive(Debug, Clone)]
pub struct Submission {
    /// The request built from the form
    pub request: Request,
    /// Confirmation to show the user
    pub notification: Notification,
}

/// Validate `form` and build the request it describes
///
/// Fails with [`ReimburseError::MissingFields`] when the requester name or
/// either period date is blank, and with [`ReimburseError::Validation`] when
/// the period cannot be read.
pub fn submit(form: &FormSession) -> ReimburseResult<Submission> {
    let requester = form.requester().trim();
    if requester.is_empty()
        || form.period_start().trim().is_empty()
        || form.period_end().trim().is_empty()
    {
        log::debug!("Submission refused: required fields missing");
        return Err(ReimburseError::MissingFields);
    }

    let period = ReportingPeriod::parse(form.period_start(), form.period_end())
        .map_err(|e| ReimburseError::Validation(e.to_string()))?;

    let mut ledger = form.ledger().clone();
    ledger.set_status(ApprovalStatus::Pending);
    let mut request = Request::new(requester, period, ledger);

    let title = match form.mode() {
        FormMode::New => "Request Submitted",
        FormMode::Edit(id) => {
            request.id = id;
            "Request Updated"
        }
    };

    log::info!(
        "{} {} for {} ({} rows, total {})",
        title,
        request.id,
        request.requester,
        request.ledger.len(),
        request.total()
    );

    Ok(Submission {
        request,
        notification: Notification::success(title, PROCESSED_MESSAGE),
    })
}

/// Like [`submit`], but reports a refusal as a notification
pub fn submit_with_notice(form: &FormSession) -> (Option<Request>, Notification) {
    match submit(form) {
        Ok(submission) => (Some(submission.request), submission.notification),
        Err(err) => (None, err.to_notification()),
    }
}
