//! In-memory record store.
//!
//! [`RecordStore`] is a plain ordered list. It performs no validation of its
//! own; id uniqueness is enforced by [`crate::ItemService`] before `append`.

use crate::record::{CharacterRecord, RecordId};
use crate::seed::seed_records;

/// Ordered, insertion-preserving collection of character records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<CharacterRecord>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the eight seed records.
    pub fn seeded() -> Self {
        Self::from_records(seed_records())
    }

    /// Create a store from an existing list of records, keeping their order.
    pub fn from_records(records: Vec<CharacterRecord>) -> Self {
        Self { records }
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[CharacterRecord] {
        &self.records
    }

    /// Add a record at the end of the store.
    pub fn append(&mut self, record: CharacterRecord) {
        self.records.push(record);
    }

    /// Remove the first record with the given id, returning it.
    pub fn remove_by_id(&mut self, id: RecordId) -> Option<CharacterRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    pub fn find_by_id(&self, id: RecordId) -> Option<&CharacterRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains_id(&self, id: RecordId) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
