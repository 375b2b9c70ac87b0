//! Ledger entry model
//!
//! One reimbursement line item. Entries are only mutated through their
//! ledger, which keeps the derived balance in step with the amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::attachment::Attachment;
use super::ids::EntryId;
use super::money::Money;
use super::status::ApprovalStatus;

/// Free-text columns of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Date,
    Payee,
    Description,
    JobNo,
}

impl TextField {
    /// Column label as shown in the form grid
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Payee => "Payee",
            Self::Description => "Description",
            Self::JobNo => "Job No.",
        }
    }
}

impl FromStr for TextField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "payee" => Ok(Self::Payee),
            "description" | "desc" => Ok(Self::Description),
            "job" | "jobno" | "job_no" | "job-no" => Ok(Self::JobNo),
            other => Err(format!("Unknown text field: {}", other)),
        }
    }
}

/// Amount columns of an entry; writing either recomputes the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    Expenses,
    Income,
}

impl FromStr for AmountField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expenses" | "expense" => Ok(Self::Expenses),
            "income" => Ok(Self::Income),
            other => Err(format!("Unknown amount field: {}", other)),
        }
    }
}

/// A single edit to one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryUpdate {
    /// Overwrite a free-text column
    SetText(TextField, String),
    /// Set an amount from raw user input; malformed input counts as zero
    SetAmount(AmountField, String),
    /// Attach a receipt file (path and display name together)
    SetAttachment(Attachment),
    /// Drop the receipt file and its name
    ClearAttachment,
}

impl EntryUpdate {
    /// Build an update from a column name and raw input, as typed in a form
    pub fn from_field(field: &str, value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        if let Ok(amount) = field.parse::<AmountField>() {
            return Ok(Self::SetAmount(amount, value));
        }
        match field.trim().to_lowercase().as_str() {
            "attachment" | "attachmentfile" | "attachment_file" | "file" => {
                if value.trim().is_empty() {
                    Ok(Self::ClearAttachment)
                } else {
                    Ok(Self::SetAttachment(Attachment::from_path(value)))
                }
            }
            _ => field
                .parse::<TextField>()
                .map(|text| Self::SetText(text, value))
                .map_err(|_| format!("Unknown field: {}", field.trim())),
        }
    }
}

/// One reimbursement line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntryRecord")]
pub struct Entry {
    id: EntryId,
    date: String,
    payee: String,
    description: String,
    expenses: Money,
    income: Money,
    balance: Money,
    job_no: String,
    status: ApprovalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachment: Option<Attachment>,
}

impl Entry {
    /// Create a blank entry
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            date: String::new(),
            payee: String::new(),
            description: String::new(),
            expenses: Money::zero(),
            income: Money::zero(),
            balance: Money::zero(),
            job_no: String::new(),
            status: ApprovalStatus::Pending,
            attachment: None,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn payee(&self) -> &str {
        &self.payee
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn job_no(&self) -> &str {
        &self.job_no
    }

    pub fn expenses(&self) -> Money {
        self.expenses
    }

    pub fn income(&self) -> Money {
        self.income
    }

    /// Expenses minus income
    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn status(&self) -> ApprovalStatus {
        self.status
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Name of the attached file, if any
    pub fn attachment_name(&self) -> Option<&str> {
        self.attachment.as_ref().map(Attachment::name)
    }

    /// Read a free-text column
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Date => &self.date,
            TextField::Payee => &self.payee,
            TextField::Description => &self.description,
            TextField::JobNo => &self.job_no,
        }
    }

    /// Check if nothing has been filled in yet
    pub fn is_blank(&self) -> bool {
        self.date.is_empty()
            && self.payee.is_empty()
            && self.description.is_empty()
            && self.job_no.is_empty()
            && self.expenses.is_zero()
            && self.income.is_zero()
            && self.attachment.is_none()
    }

    /// Apply one edit, keeping the balance consistent with the amounts
    pub(crate) fn apply(&mut self, update: EntryUpdate) {
        match update {
            EntryUpdate::SetText(field, value) => {
                let slot = match field {
                    TextField::Date => &mut self.date,
                    TextField::Payee => &mut self.payee,
                    TextField::Description => &mut self.description,
                    TextField::JobNo => &mut self.job_no,
                };
                *slot = value;
            }
            EntryUpdate::SetAmount(field, raw) => {
                let amount = Money::parse_lenient(&raw);
                match field {
                    AmountField::Expenses => self.expenses = amount,
                    AmountField::Income => self.income = amount,
                }
                self.recompute_balance();
            }
            EntryUpdate::SetAttachment(attachment) => self.attachment = Some(attachment),
            EntryUpdate::ClearAttachment => self.attachment = None,
        }
    }

    pub(crate) fn set_status(&mut self, status: ApprovalStatus) {
        self.status = status;
    }

    fn recompute_balance(&mut self) {
        self.balance = self.expenses - self.income;
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {} {}", self.id, self.date, self.payee, self.balance)
    }
}

/// Serialized shape of an entry; the balance is derived again on load
#[derive(Deserialize)]
struct EntryRecord {
    id: EntryId,
    #[serde(default)]
    date: String,
    #[serde(default)]
    payee: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    expenses: Money,
    #[serde(default)]
    income: Money,
    #[serde(default)]
    job_no: String,
    #[serde(default)]
    status: ApprovalStatus,
    #[serde(default)]
    attachment: Option<Attachment>,
}

impl From<EntryRecord> for Entry {
    fn from(record: EntryRecord) -> Self {
        let mut entry = Entry {
            id: record.id,
            date: record.date,
            payee: record.payee,
            description: record.description,
            expenses: record.expenses,
            income: record.income,
            balance: Money::zero(),
            job_no: record.job_no,
            status: record.status,
            attachment: record.attachment,
        };
        entry.recompute_balance();
        entry
    }
}
