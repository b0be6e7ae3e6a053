//! In-memory announcement store.

use std::sync::atomic::{AtomicUsize, Ordering};

use herald_core::{Announcement, AnnouncementField};

use crate::{AnnouncementStore, StoreError};

/// A fixed, ordered set of records.
///
/// Counts calls so callers can assert which path a request took.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<Announcement>,
    list_calls: AtomicUsize,
    lookup_calls: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new(records: Vec<Announcement>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// Number of full-collection reads served.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::Relaxed)
    }

    /// Number of field lookups served.
    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::Relaxed)
    }
}

#[async_trait::async_trait]
impl AnnouncementStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Announcement>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.records.clone())
    }

    async fn find_by_field(
        &self,
        field: AnnouncementField,
        value: &str,
    ) -> Result<Option<Announcement>, StoreError> {
        self.lookup_calls.fetch_add(1, Ordering::Relaxed);
        Ok(self
            .records
            .iter()
            .find(|record| record.field(field) == value)
            .cloned())
    }
}
