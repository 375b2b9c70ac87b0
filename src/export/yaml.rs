//! YAML export functionality
//!
//! Same content as the JSON export, in a form that is easier to read.

use std::io::Write;

use crate::error::{ReimburseError, ReimburseResult};
use crate::export::json::RequestsExport;
use crate::models::Request;

/// Export requests to YAML
pub fn export_requests_yaml<W: Write>(requests: &[Request], writer: &mut W) -> ReimburseResult<()> {
    let export = RequestsExport::new(requests.to_vec());

    writeln!(writer, "# reimburse-cli request export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .map_err(|e| ReimburseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ReimburseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_requests;

    #[test]
    fn test_yaml_export() {
        let requests = demo_requests().unwrap();
        let mut output = Vec::new();
        export_requests_yaml(&requests, &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        assert!(yaml.starts_with("# reimburse-cli request export"));
        assert!(yaml.contains("requester: John Doe"));
        assert!(yaml.contains("Office Depot"));

        let parsed: RequestsExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.requests, requests);
    }
}
