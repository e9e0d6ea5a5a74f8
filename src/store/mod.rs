//! Authoritative in-memory contact list with automatic persistence.
//!
//! The store owns the ordered list and the injected snapshot repository.
//! Every successful mutation rewrites the full snapshot before returning;
//! there is no partial or incremental persistence.

use crate::error::StorageResult;
use crate::models::{Contact, ContactPatch};
use crate::repositories::SnapshotRepository;
use std::sync::Arc;

/// The contact list plus its persistence hookup.
///
/// Accessed from a single logical thread of control; callers needing shared
/// access wrap it in a lock (see `services`).
pub struct ContactStore {
    contacts: Vec<Contact>,
    repository: Arc<dyn SnapshotRepository>,
}

impl ContactStore {
    /// Initialize the store from the persisted snapshot.
    ///
    /// An absent or malformed snapshot yields an empty list (the repository
    /// fails soft); substrate I/O errors propagate.
    pub fn load(repository: Arc<dyn SnapshotRepository>) -> StorageResult<Self> {
        let contacts = repository.load()?;
        tracing::debug!("Loaded {} contact(s) from snapshot", contacts.len());
        Ok(Self {
            contacts,
            repository,
        })
    }

    /// The full list in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Append a contact to the end of the list and persist.
    ///
    /// No field validation and no duplicate-id check.
    pub fn add_contact(&mut self, contact: Contact) -> StorageResult<()> {
        self.contacts.push(contact);
        self.persist()
    }

    /// Remove all entries matching `id` and persist.
    ///
    /// A missing id is silently a no-op (the snapshot is still rewritten).
    pub fn delete_contact(&mut self, id: &str) -> StorageResult<()> {
        self.contacts.retain(|contact| contact.id != id);
        self.persist()
    }

    /// Merge `patch` over the entry matching `id` and persist.
    ///
    /// Entries not matching `id` are untouched; a missing id is a no-op.
    pub fn update_contact(&mut self, id: &str, patch: ContactPatch) -> StorageResult<()> {
        if let Some(contact) = self.contacts.iter_mut().find(|c| c.id == id) {
            patch.merge_into(contact);
        }
        self.persist()
    }

    /// Ordered subsequence of contacts matching `term`.
    ///
    /// An empty term returns the full list. Otherwise an entry matches when
    /// the lowercased term is a substring of its user name, display name,
    /// city, or region. Pure read; order is preserved and the filter is
    /// stable across calls.
    pub fn filter_contacts(&self, term: &str) -> Vec<&Contact> {
        if term.is_empty() {
            return self.contacts.iter().collect();
        }

        let needle = term.to_lowercase();
        self.contacts
            .iter()
            .filter(|contact| contact.matches_term(&needle))
            .collect()
    }

    fn persist(&self) -> StorageResult<()> {
        self.repository.save(&self.contacts)
    }
}
