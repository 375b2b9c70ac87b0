//! Strongly-typed identifiers
//!
//! Requests get random UUID-backed ids; ledger entries get small positive
//! integers handed out by their ledger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const REQUEST_PREFIX: &str = "req-";

/// Identifier of a reimbursement request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        s.parse()
    }

    /// Whether `identifier` names this request, either as a full UUID or as
    /// a prefix of the short display form (`req-1a2b3c4d`)
    pub fn matches(&self, identifier: &str) -> bool {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return false;
        }
        if let Ok(uuid) = Uuid::parse_str(identifier) {
            return uuid == self.0;
        }
        let short = identifier.strip_prefix(REQUEST_PREFIX).unwrap_or(identifier);
        !short.is_empty() && self.0.simple().to_string().starts_with(&short.to_lowercase())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", REQUEST_PREFIX, &self.0.simple().to_string()[..8])
    }
}

impl From<Uuid> for RequestId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for RequestId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(REQUEST_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier of an entry within one ledger
///
/// Only unique inside the ledger that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u32);

impl EntryId {
    /// Wrap a raw entry number
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw entry number
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The id following this one, if there is one
    pub(crate) fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntryId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().trim_start_matches('#').parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_display() {
        let id = RequestId::new();
        let display = id.to_string();
        assert!(display.starts_with("req-"));
        assert_eq!(display.len(), 12); // "req-" + 8 chars
    }

    #[test]
    fn test_request_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = RequestId::parse(uuid_str).unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let prefixed: RequestId = format!("req-{}", uuid_str).parse().unwrap();
        assert_eq!(prefixed, id);
    }

    #[test]
    fn test_request_id_matches() {
        let id = RequestId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(id.matches("550e8400-e29b-41d4-a716-446655440000"));
        assert!(id.matches("req-550e8400"));
        assert!(id.matches("550E84"));
        assert!(!id.matches("req-"));
        assert!(!id.matches(""));
        assert!(!id.matches("deadbeef"));
    }

    #[test]
    fn test_entry_id() {
        let id: EntryId = "3".parse().unwrap();
        assert_eq!(id, EntryId::new(3));
        assert_eq!(id.next(), Some(EntryId::new(4)));
        assert_eq!(EntryId::new(u32::MAX).next(), None);
        assert_eq!("#7".parse::<EntryId>().unwrap().get(), 7);
        assert!("x".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = RequestId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);

        assert_eq!(serde_json::to_string(&EntryId::new(2)).unwrap(), "2");
    }
}
