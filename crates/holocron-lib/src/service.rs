//! Item service: business rules over the record store.
//!
//! The service owns its [`RecordStore`] behind a single mutex. Each operation
//! holds the lock for its whole duration, so a check-then-mutate sequence
//! such as the duplicate-id check in [`ItemService::add`] is atomic with
//! respect to other callers.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::{CharacterRecord, ItemSummary, RecordId};
use crate::store::RecordStore;

/// Business-logic façade over a [`RecordStore`].
#[derive(Debug, Default)]
pub struct ItemService {
    store: Mutex<RecordStore>,
}

impl ItemService {
    /// Wrap an existing store.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Create a service backed by a freshly seeded store.
    pub fn seeded() -> Self {
        Self::new(RecordStore::seeded())
    }

    // Every mutation is a single push or remove, so the store is consistent
    // even if a previous holder panicked.
    fn store(&self) -> MutexGuard<'_, RecordStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every record projected to its summary fields, in store order.
    pub fn get_all(&self) -> Vec<ItemSummary> {
        self.store().list().iter().map(ItemSummary::from).collect()
    }

    /// Every full record whose name matches `name`, ignoring case.
    ///
    /// Returns an empty list when nothing matches.
    pub fn get_by_name(&self, name: &str) -> Vec<CharacterRecord> {
        self.store()
            .list()
            .iter()
            .filter(|r| r.name_matches(name))
            .cloned()
            .collect()
    }

    pub fn get_by_id(&self, id: RecordId) -> Option<CharacterRecord> {
        self.store().find_by_id(id).cloned()
    }

    /// Append a new record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if a record with the same id exists.
    /// The store is left untouched in that case.
    pub fn add(&self, record: CharacterRecord) -> Result<CharacterRecord> {
        let mut store = self.store();
        if store.contains_id(record.id) {
            return Err(Error::DuplicateId { id: record.id });
        }

        debug!(id = record.id, name = %record.name, "appending record");
        store.append(record.clone());
        Ok(record)
    }

    /// Remove the record with the given id, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has that id.
    pub fn delete_by_id(&self, id: RecordId) -> Result<CharacterRecord> {
        let removed = self.store().remove_by_id(id).ok_or(Error::NotFound { id })?;
        debug!(id, name = %removed.name, "removed record");
        Ok(removed)
    }

    /// Current number of records in the store.
    pub fn len(&self) -> usize {
        self.store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }
}
