//! Ledger display formatting
//!
//! Renders a ledger as the form's editable grid: one line per entry, numbered
//! by position, with the derived balance and a total underneath.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Ledger, Row};

#[derive(Tabled)]
struct GridRow {
    #[tabled(rename = "No.")]
    number: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Payee")]
    payee: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Job No.")]
    job_no: String,
    #[tabled(rename = "Receipt")]
    receipt: String,
}

impl GridRow {
    fn from_row(row: Row<'_>, currency_symbol: &str) -> Self {
        let entry = row.entry;
        Self {
            number: row.number,
            id: format!("#{}", entry.id()),
            date: entry.date().to_string(),
            payee: truncate(entry.payee(), 24),
            description: truncate(entry.description(), 30),
            expenses: entry.expenses().format_with_symbol(currency_symbol),
            income: entry.income().format_with_symbol(currency_symbol),
            balance: entry.balance().format_with_symbol(currency_symbol),
            job_no: entry.job_no().to_string(),
            receipt: entry.attachment_name().unwrap_or("").to_string(),
        }
    }
}

/// Format a ledger as a table followed by its total
pub fn format_ledger(ledger: &Ledger, currency_symbol: &str) -> String {
    let rows: Vec<GridRow> = ledger
        .rows()
        .map(|row| GridRow::from_row(row, currency_symbol))
        .collect();

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    output.push_str(&format!(
        "Total Amount: {}\n",
        ledger.total().format_with_symbol(currency_symbol)
    ));
    output
}

/// Truncate a string to a maximum number of characters
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
