//! Request display formatting
//!
//! Formats requests for the review board list and the detail view.

use crate::display::ledger::{format_ledger, truncate};
use crate::models::Request;

/// Format a list of requests as the review board table
pub fn format_request_list(
    requests: &[&Request],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if requests.is_empty() {
        return "No requests found.\n".to_string();
    }

    let name_width = requests
        .iter()
        .map(|r| r.requester.chars().count().min(24))
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<25}  {:>14}  {:<10}  {}\n",
        "ID",
        "Name",
        "Period",
        "Total Amount",
        "Created At",
        "Status",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<25}  {:->14}  {:-<10}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for request in requests {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<25}  {:>14}  {:<10}  {}\n",
            request.id.to_string(),
            truncate(&request.requester, 24),
            request.period.format(date_format),
            request.total().format_with_symbol(currency_symbol),
            request.created_at.format(date_format).to_string(),
            request.status,
            name_width = name_width,
        ));
    }

    output
}

/// Format one request with its line items
pub fn format_request_details(
    request: &Request,
    currency_symbol: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Request:    {}\n", request.id));
    output.push_str(&format!("Name:       {}\n", request.requester));
    output.push_str(&format!(
        "Period:     {}\n",
        request.period.format(date_format)
    ));
    output.push_str(&format!("Status:     {}\n", request.status));
    output.push_str(&format!(
        "Created At: {}\n",
        request.created_at.format(date_format)
    ));
    output.push('\n');
    output.push_str(&format_ledger(&request.ledger, currency_symbol));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_requests;

    #[test]
    fn test_format_request_list() {
        let requests = demo_requests().unwrap();
        let refs: Vec<&Request> = requests.iter().collect();

        let formatted = format_request_list(&refs, "$", "%Y-%m-%d");
        assert!(formatted.contains("John Doe"));
        assert!(formatted.contains("Sarah Williams"));
        assert!(formatted.contains("$150.00"));
        assert!(formatted.contains("$375.50"));
        assert!(formatted.contains("2024-03-01 - 2024-03-31"));
        assert!(formatted.contains("Pending"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_request_list(&[], "$", "%Y-%m-%d").contains("No requests found"));
    }

    #[test]
    fn test_format_request_details() {
        let requests = demo_requests().unwrap();
        let formatted = format_request_details(&requests[1], "$", "%Y-%m-%d");
        assert!(formatted.contains("Sarah Williams"));
        assert!(formatted.contains("Print Shop"));
        assert!(formatted.contains("Office Depot"));
        assert!(formatted.contains("Total Amount: $375.50"));
        assert!(formatted.contains("Created At: 2024-03-19"));
    }
}
