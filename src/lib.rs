//! reimburse-cli - Expense reimbursement requests from the terminal
//!
//! This library provides the core of the reimburse-cli application: an
//! employee fills in a reimbursement form as a ledger of line items, submits
//! it, and a reviewer approves or denies the resulting request.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, the ledger, requests, money)
//! - `services`: Form, submission, and review workflows
//! - `notification`: User-facing messages produced by the workflows
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON, and YAML export
//! - `cli`: Command handlers for the `reimburse` binary
//!
//! # Example
//!
//! ```rust
//! use reimburse_cli::models::{AmountField, EntryUpdate, Ledger, Money};
//!
//! let mut ledger = Ledger::new();
//! let id = ledger.entries()[0].id();
//! ledger.update(id, EntryUpdate::SetAmount(AmountField::Expenses, "150".into()));
//! ledger.update(id, EntryUpdate::SetAmount(AmountField::Income, "50".into()));
//! assert_eq!(ledger.total(), Money::from_cents(10000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod notification;
pub mod seed;
pub mod services;

pub use error::ReimburseError;
