//! Core data models for reimburse-cli
//!
//! Entries and the ledger that owns them, plus the request that wraps a
//! submitted ledger for HR review.

pub mod attachment;
pub mod entry;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod period;
pub mod request;
pub mod status;

pub use attachment::Attachment;
pub use entry::{AmountField, Entry, EntryUpdate, TextField};
pub use ids::{EntryId, RequestId};
pub use ledger::{Ledger, Row};
pub use money::Money;
pub use period::{PeriodError, ReportingPeriod};
pub use request::Request;
pub use status::ApprovalStatus;
