//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledgers and requests for terminal
//! display.

pub mod ledger;
pub mod request;

pub use ledger::format_ledger;
pub use request::{format_request_details, format_request_list};
