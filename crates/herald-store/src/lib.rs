//! # herald-store
//!
//! Read-only access to the announcement collection.
//!
//! The service never writes: it lists the whole collection for substring
//! matching, or asks the store for the first document whose field equals a
//! value for exact matching. Nothing is cached between requests.
//!
//! - [`FirestoreStore`] talks to the Firestore REST API with a service account.
//! - [`MemoryStore`] serves a fixed set of records (tests, local runs).

pub mod firestore;
pub mod memory;

mod error;

pub use error::StoreError;
pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

use herald_core::{Announcement, AnnouncementField};

/// Read access to announcement records.
#[async_trait::async_trait]
pub trait AnnouncementStore: Send + Sync {
    /// Every record in the collection, in the store's order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be reached or answers with
    /// something unreadable.
    async fn list_all(&self) -> Result<Vec<Announcement>, StoreError>;

    /// The first record whose `field` equals `value` exactly, if any.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AnnouncementStore::list_all`].
    async fn find_by_field(
        &self,
        field: AnnouncementField,
        value: &str,
    ) -> Result<Option<Announcement>, StoreError>;
}
