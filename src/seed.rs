//! Demo requests for the review board
//!
//! Rows are entered through the ledger just as a form would, so balances are
//! derived rather than typed in.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::error::{ReimburseError, ReimburseResult};
use crate::models::{
    AmountField, EntryId, EntryUpdate, Ledger, ReportingPeriod, Request, TextField,
};

struct DemoRow {
    date: &'static str,
    payee: &'static str,
    description: &'static str,
    expenses: &'static str,
    job_no: &'static str,
}

/// Build the pending demo requests
pub fn demo_requests() -> ReimburseResult<Vec<Request>> {
    Ok(vec![
        demo_request(
            "John Doe",
            "2024-03-16",
            &[DemoRow {
                date: "2024-03-15",
                payee: "Office Supplies Co",
                description: "Stationery",
                expenses: "150.00",
                job_no: "6991",
            }],
        )?,
        demo_request(
            "Sarah Williams",
            "2024-03-19",
            &[
                DemoRow {
                    date: "2024-03-18",
                    payee: "Print Shop",
                    description: "Marketing Materials",
                    expenses: "250.00",
                    job_no: "6991",
                },
                DemoRow {
                    date: "2024-03-19",
                    payee: "Office Depot",
                    description: "Office Supplies",
                    expenses: "125.50",
                    job_no: "6991",
                },
            ],
        )?,
    ])
}

fn demo_request(requester: &str, created: &str, rows: &[DemoRow]) -> ReimburseResult<Request> {
    let period = ReportingPeriod::parse("2024-03-01", "2024-03-31")
        .map_err(|e| ReimburseError::Validation(e.to_string()))?;

    let mut ledger = Ledger::new();
    for (i, row) in rows.iter().enumerate() {
        let id = if i == 0 {
            EntryId::new(1)
        } else {
            ledger.add_row()
        };
        fill_row(&mut ledger, id, row);
    }

    let created_at = NaiveDate::parse_from_str(created, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
        .ok_or_else(|| ReimburseError::Validation(format!("Invalid demo date: {}", created)))?;

    let mut request = Request::new(requester, period, ledger);
    request.created_at = created_at;
    Ok(request)
}

fn fill_row(ledger: &mut Ledger, id: EntryId, row: &DemoRow) {
    let updates = [
        EntryUpdate::SetText(TextField::Date, row.date.to_string()),
        EntryUpdate::SetText(TextField::Payee, row.payee.to_string()),
        EntryUpdate::SetText(TextField::Description, row.description.to_string()),
        EntryUpdate::SetAmount(AmountField::Expenses, row.expenses.to_string()),
        EntryUpdate::SetAmount(AmountField::Income, "0".to_string()),
        EntryUpdate::SetText(TextField::JobNo, row.job_no.to_string()),
    ];
    for update in updates {
        ledger.update(id, update);
    }
}
