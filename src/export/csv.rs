//! CSV export functionality
//!
//! Writes one line per ledger entry, repeating the request columns, so the
//! file opens cleanly in a spreadsheet.

use std::io::Write;

use crate::error::{ReimburseError, ReimburseResult};
use crate::models::Request;

const HEADER: [&str; 15] = [
    "Request ID",
    "Name",
    "Period Start",
    "Period End",
    "Request Status",
    "No.",
    "Entry ID",
    "Date",
    "Payee",
    "Description",
    "Expenses",
    "Income",
    "Balance",
    "Job No.",
    "Receipt",
];

/// Export the line items of all requests to CSV
pub fn export_requests_csv<W: Write>(requests: &[Request], writer: W) -> ReimburseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER).map_err(export_error)?;

    for request in requests {
        let request_id = request.id.as_uuid().to_string();
        let period_start = request.period.start_date().to_string();
        let period_end = request.period.end_date().to_string();

        for row in request.ledger.rows() {
            let entry = row.entry;
            let record = [
                request_id.clone(),
                request.requester.clone(),
                period_start.clone(),
                period_end.clone(),
                request.status.as_str().to_string(),
                row.number.to_string(),
                entry.id().to_string(),
                entry.date().to_string(),
                entry.payee().to_string(),
                entry.description().to_string(),
                entry.expenses().to_decimal_string(),
                entry.income().to_decimal_string(),
                entry.balance().to_decimal_string(),
                entry.job_no().to_string(),
                entry.attachment_name().unwrap_or_default().to_string(),
            ];
            csv_writer.write_record(&record).map_err(export_error)?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

fn export_error(err: csv::Error) -> ReimburseError {
    ReimburseError::Export(err.to_string())
}
