//! Form drafts
//!
//! A draft is a form filled in ahead of time, in JSON or YAML. Loading one
//! replays its rows through a [`FormSession`] exactly as typed input would
//! be, so amounts are parsed and balances derived the same way.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ReimburseError, ReimburseResult};
use crate::models::{AmountField, Attachment, EntryUpdate, TextField};
use crate::services::form::{FormAction, FormSession};

/// An amount as written in a draft: a number or raw text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DraftAmount {
    Number(f64),
    Text(String),
}

impl DraftAmount {
    /// The amount as form input
    pub fn as_input(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// One pre-filled row
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DraftRow {
    pub date: String,
    pub payee: String,
    pub description: String,
    pub expenses: Option<DraftAmount>,
    pub income: Option<DraftAmount>,
    #[serde(alias = "jobNo")]
    pub job_no: String,
    #[serde(alias = "attachmentFile")]
    pub attachment: Option<PathBuf>,
}

/// A pre-filled form
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Draft {
    #[serde(alias = "name")]
    pub requester: String,
    #[serde(alias = "periodStart")]
    pub period_start: String,
    #[serde(alias = "periodEnd")]
    pub period_end: String,
    #[serde(alias = "entries")]
    pub rows: Vec<DraftRow>,
}

impl Draft {
    /// Read a draft file; `.yaml`/`.yml` files are YAML, anything else JSON
    pub fn from_path(path: &Path) -> ReimburseResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ReimburseError::Draft(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        let draft = if is_yaml {
            serde_yaml::from_str(&contents)
                .map_err(|e| ReimburseError::Draft(format!("{}: {}", path.display(), e)))?
        } else {
            serde_json::from_str(&contents)
                .map_err(|e| ReimburseError::Draft(format!("{}: {}", path.display(), e)))?
        };

        Ok(draft)
    }

    /// Replay the draft into a fresh form
    pub fn into_form(self) -> FormSession {
        let mut form = FormSession::new();
        form.dispatch(FormAction::SetRequester(self.requester));
        form.dispatch(FormAction::SetPeriodStart(self.period_start));
        form.dispatch(FormAction::SetPeriodEnd(self.period_end));

        for (i, row) in self.rows.into_iter().enumerate() {
            let id = if i == 0 {
                form.ledger().entries()[0].id()
            } else {
                let id = form.ledger().next_id();
                form.dispatch(FormAction::AddRow);
                id
            };

            for update in row_updates(row) {
                form.dispatch(FormAction::UpdateEntry(id, update));
            }
        }

        form
    }
}

fn row_updates(row: DraftRow) -> Vec<EntryUpdate> {
    let mut updates = vec![
        EntryUpdate::SetText(TextField::Date, row.date),
        EntryUpdate::SetText(TextField::Payee, row.payee),
        EntryUpdate::SetText(TextField::Description, row.description),
        EntryUpdate::SetText(TextField::JobNo, row.job_no),
    ];
    if let Some(expenses) = row.expenses {
        updates.push(EntryUpdate::SetAmount(
            AmountField::Expenses,
            expenses.as_input(),
        ));
    }
    if let Some(income) = row.income {
        updates.push(EntryUpdate::SetAmount(AmountField::Income, income.as_input()));
    }
    if let Some(path) = row.attachment {
        updates.push(EntryUpdate::SetAttachment(Attachment::from_path(path)));
    }
    updates
}
