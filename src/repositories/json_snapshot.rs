use crate::error::StorageResult;
use crate::models::Contact;
use crate::repositories::{KeyValueStore, SnapshotRepository};
use std::sync::Arc;

/// Fixed key the contact list snapshot is stored under.
pub const CONTACTS_KEY: &str = "contacts";

/// Snapshot repository serializing the full contact list as JSON into a
/// key-value substrate.
///
/// A malformed snapshot is logged and treated as empty rather than crashing
/// the load; substrate I/O errors propagate.
pub struct JsonSnapshotRepository {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl JsonSnapshotRepository {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(kv, CONTACTS_KEY)
    }

    pub fn with_key(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }
}

impl SnapshotRepository for JsonSnapshotRepository {
    fn load(&self) -> StorageResult<Vec<Contact>> {
        let Some(text) = self.kv.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&text) {
            Ok(contacts) => Ok(contacts),
            Err(e) => {
                tracing::warn!("Malformed contact snapshot, starting empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, contacts: &[Contact]) -> StorageResult<()> {
        let text = serde_json::to_string(contacts)?;
        self.kv.set(&self.key, &text)
    }
}
