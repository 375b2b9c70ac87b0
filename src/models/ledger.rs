//! Entry ledger
//!
//! The ordered rows of one reimbursement form. All edits go through
//! [`Ledger`], which owns the rules:
//!
//! - there is always at least one row;
//! - row ids come from a counter that only moves forward, so an id is never
//!   handed out twice by the same ledger;
//! - an amount edit and its balance recomputation happen in one step;
//! - edits aimed at an id the ledger does not hold change nothing.
//!
//! Row numbers shown to users are positions (1..N), not ids.

use serde::{Deserialize, Serialize};

use super::entry::{Entry, EntryUpdate};
use super::ids::EntryId;
use super::money::Money;
use super::status::ApprovalStatus;
use crate::error::{ReimburseError, ReimburseResult};

/// Ordered, never-empty list of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LedgerRecord")]
pub struct Ledger {
    entries: Vec<Entry>,
    next_id: EntryId,
}

/// An entry together with its displayed row number
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    /// 1-based position in the ledger
    pub number: usize,
    pub entry: &'a Entry,
}

impl Ledger {
    /// Create a ledger holding a single blank entry with id 1
    pub fn new() -> Self {
        Self {
            entries: vec![Entry::new(EntryId::new(1))],
            next_id: EntryId::new(2),
        }
    }

    /// Build a ledger from existing entries, e.g. when reopening a request
    ///
    /// Fails if `entries` is empty, repeats an id, or holds the largest
    /// possible id. New rows continue numbering after the highest existing id.
    pub fn from_entries(entries: Vec<Entry>) -> ReimburseResult<Self> {
        if entries.is_empty() {
            return Err(ReimburseError::Validation(
                "A ledger needs at least one entry".into(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id()) {
                return Err(ReimburseError::Validation(format!(
                    "Duplicate entry id: {}",
                    entry.id()
                )));
            }
        }

        let next_id = entries
            .iter()
            .map(Entry::id)
            .max()
            .and_then(|id| id.next())
            .ok_or_else(|| ReimburseError::Validation("Entry id out of range".into()))?;

        Ok(Self { entries, next_id })
    }

    /// Append a blank entry and return its id
    pub fn add_row(&mut self) -> EntryId {
        let id = self.next_id;
        match id.next() {
            Some(next) => self.next_id = next,
            None => log::warn!("Ledger row ids exhausted at {}", id),
        }
        self.entries.push(Entry::new(id));
        log::debug!("Added ledger row {}", id);
        id
    }

    /// Remove the entry with `id`
    ///
    /// Returns the removed entry, or `None` when no entry has that id.
    /// Removing the only remaining entry is refused with
    /// [`ReimburseError::LastRow`] and leaves the ledger as it was.
    pub fn remove_row(&mut self, id: EntryId) -> ReimburseResult<Option<Entry>> {
        if self.entries.len() <= 1 {
            log::debug!("Refused to remove row {}: last row", id);
            return Err(ReimburseError::LastRow);
        }

        match self.position(id) {
            Some(index) => {
                log::debug!("Removed ledger row {}", id);
                Ok(Some(self.entries.remove(index)))
            }
            None => {
                log::debug!("No ledger row {} to remove", id);
                Ok(None)
            }
        }
    }

    /// Apply an edit to the entry with `id`
    ///
    /// Returns `false`, changing nothing, when no entry has that id.
    pub fn update(&mut self, id: EntryId, update: EntryUpdate) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(entry) => {
                entry.apply(update);
                true
            }
            None => {
                log::debug!("Ignored update for unknown ledger row {}", id);
                false
            }
        }
    }

    /// Set every entry's status, following a decision on the whole request
    pub(crate) fn set_status(&mut self, status: ApprovalStatus) {
        for entry in &mut self.entries {
            entry.set_status(status);
        }
    }

    /// Number of entries (always at least one)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in display order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up an entry by id
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    /// Entries with their 1-based row numbers
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Row {
                number: i + 1,
                entry,
            })
    }

    /// Sum of all entry balances
    pub fn total(&self) -> Money {
        self.entries.iter().map(Entry::balance).sum()
    }

    /// The id the next added row will get
    pub fn next_id(&self) -> EntryId {
        self.next_id
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct LedgerRecord {
    entries: Vec<Entry>,
    #[serde(default)]
    next_id: Option<EntryId>,
}

impl TryFrom<LedgerRecord> for Ledger {
    type Error = ReimburseError;

    fn try_from(record: LedgerRecord) -> Result<Self, Self::Error> {
        let mut ledger = Ledger::from_entries(record.entries)?;
        if let Some(next_id) = record.next_id {
            if next_id.next().is_none() {
                return Err(ReimburseError::Validation(
                    "Entry id counter out of range".into(),
                ));
            }
            ledger.next_id = ledger.next_id.max(next_id);
        }
        Ok(ledger)
    }
}
