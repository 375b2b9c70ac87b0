//! Receipt attachments
//!
//! Only a reference to the selected file is kept, together with the name
//! shown to the user. File contents are never read.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A file selected as the receipt for one ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AttachmentRecord")]
pub struct Attachment {
    path: PathBuf,
    name: String,
}

impl Attachment {
    /// Reference a file, deriving its display name from the final path component
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = display_name(&path);
        Self { path, name }
    }

    /// The referenced file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Human-readable file name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Serialized shape; the name is always rederived on load
#[derive(Deserialize)]
struct AttachmentRecord {
    path: PathBuf,
}

impl From<AttachmentRecord> for Attachment {
    fn from(record: AttachmentRecord) -> Self {
        Self::from_path(record.path)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_path() {
        let a = Attachment::from_path("receipts/2024/invoice.pdf");
        assert_eq!(a.name(), "invoice.pdf");
        assert_eq!(a.path(), Path::new("receipts/2024/invoice.pdf"));
    }

    #[test]
    fn test_bare_file_name() {
        assert_eq!(Attachment::from_path("invoice.pdf").name(), "invoice.pdf");
    }

    #[test]
    fn test_deserialize_ignores_stored_name() {
        let json = r#"{"path":"scans/taxi.png","name":"something else"}"#;
        let a: Attachment = serde_json::from_str(json).unwrap();
        assert_eq!(a.name(), "taxi.png");
    }
}
