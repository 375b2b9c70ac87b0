//! Form session
//!
//! Holds the state of one open reimbursement form: the top-level fields as
//! typed, plus the entry ledger. The hosting surface feeds it one
//! [`FormAction`] per user event and shows any notification it returns.

use crate::error::{ReimburseError, ReimburseResult};
use crate::models::{EntryId, EntryUpdate, Ledger, Request, RequestId};
use crate::notification::Notification;

/// Whether the form creates a new request or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit(RequestId),
}

/// One user event on the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetRequester(String),
    SetPeriodStart(String),
    SetPeriodEnd(String),
    AddRow,
    RemoveRow(EntryId),
    UpdateEntry(EntryId, EntryUpdate),
}

/// State of one in-progress form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    requester: String,
    period_start: String,
    period_end: String,
    ledger: Ledger,
    mode: FormMode,
}

impl FormSession {
    /// Open a blank form with a single empty row
    pub fn new() -> Self {
        Self {
            requester: String::new(),
            period_start: String::new(),
            period_end: String::new(),
            ledger: Ledger::new(),
            mode: FormMode::New,
        }
    }

    /// Open a form pre-filled from an existing request
    ///
    /// Only pending requests can be reopened; a decided one is refused with
    /// [`ReimburseError::InvalidTransition`].
    pub fn edit(request: &Request) -> ReimburseResult<Self> {
        if !request.is_pending() {
            return Err(ReimburseError::InvalidTransition {
                action: "edit",
                status: request.status.as_str().to_string(),
            });
        }

        Ok(Self {
            requester: request.requester.clone(),
            period_start: request.period.start_date().to_string(),
            period_end: request.period.end_date().to_string(),
            ledger: request.ledger.clone(),
            mode: FormMode::Edit(request.id),
        })
    }

    /// Apply one user event
    ///
    /// Returns a notification when the action was refused.
    pub fn dispatch(&mut self, action: FormAction) -> Option<Notification> {
        match action {
            FormAction::SetRequester(name) => self.requester = name,
            FormAction::SetPeriodStart(date) => self.period_start = date,
            FormAction::SetPeriodEnd(date) => self.period_end = date,
            FormAction::AddRow => {
                self.ledger.add_row();
            }
            FormAction::RemoveRow(id) => {
                if let Err(err) = self.ledger.remove_row(id) {
                    return Some(err.to_notification());
                }
            }
            FormAction::UpdateEntry(id, update) => {
                self.ledger.update(id, update);
            }
        }
        None
    }

    pub fn requester(&self) -> &str {
        &self.requester
    }

    pub fn period_start(&self) -> &str {
        &self.period_start
    }

    pub fn period_end(&self) -> &str {
        &self.period_end
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AmountField, Money, ReportingPeriod, TextField};
    use crate::notification::NotificationType;
    use chrono::NaiveDate;

    #[test]
    fn test_new_form() {
        let form = FormSession::new();
        assert_eq!(form.mode(), FormMode::New);
        assert_eq!(form.ledger().len(), 1);
        assert!(form.requester().is_empty());
    }

    #[test]
    fn test_dispatch_edits() {
        let mut form = FormSession::new();
        assert!(form
            .dispatch(FormAction::SetRequester("John Doe".into()))
            .is_none());
        form.dispatch(FormAction::SetPeriodStart("2024-03-01".into()));
        form.dispatch(FormAction::SetPeriodEnd("2024-03-31".into()));
        form.dispatch(FormAction::AddRow);
        form.dispatch(FormAction::UpdateEntry(
            EntryId::new(2),
            EntryUpdate::SetText(TextField::Payee, "Print Shop".into()),
        ));
        form.dispatch(FormAction::UpdateEntry(
            EntryId::new(2),
            EntryUpdate::SetAmount(AmountField::Expenses, "250".into()),
        ));

        assert_eq!(form.requester(), "John Doe");
        assert_eq!(form.period_start(), "2024-03-01");
        assert_eq!(form.period_end(), "2024-03-31");
        assert_eq!(form.ledger().len(), 2);
        assert_eq!(form.ledger().total(), Money::from_cents(25000));
    }

    #[test]
    fn test_remove_last_row_warns() {
        let mut form = FormSession::new();
        let before = form.clone();

        let notification = form
            .dispatch(FormAction::RemoveRow(EntryId::new(1)))
            .expect("removal should be refused");

        assert_eq!(notification.notification_type, NotificationType::Warning);
        assert_eq!(notification.description, "At least one row must remain");
        assert_eq!(form, before);
    }

    #[test]
    fn test_edit_prefills_from_request() {
        let period = ReportingPeriod::range(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
        .unwrap();
        let request = Request::new("Sarah Williams", period, Ledger::new());

        let form = FormSession::edit(&request).unwrap();
        assert_eq!(form.mode(), FormMode::Edit(request.id));
        assert_eq!(form.requester(), "Sarah Williams");
        assert_eq!(form.period_start(), "2024-03-01");
        assert_eq!(form.period_end(), "2024-03-31");
        assert_eq!(form.ledger(), &request.ledger);
    }

    #[test]
    fn test_edit_refuses_decided_request() {
        let period = ReportingPeriod::single(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let mut request = Request::new("John Doe", period, Ledger::new());
        request.approve().unwrap();

        let err = FormSession::edit(&request).unwrap_err();
        assert!(matches!(
            err,
            ReimburseError::InvalidTransition { action: "edit", .. }
        ));
        assert_eq!(err.to_notification().title, "Request Already Reviewed");
    }
}
