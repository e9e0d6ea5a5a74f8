use crate::error::StorageResult;
use crate::models::Contact;

/// Key-value substrate scoped to the running client.
///
/// A localStorage-style contract: `get(key) -> text | absent`,
/// `set(key, text)`. No transactionality, no versioning.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Whole-list snapshot persistence for the contact list.
///
/// Provides abstraction over snapshot storage, enabling different
/// implementations (file-backed, in-memory) to be injected into the store.
pub trait SnapshotRepository: Send + Sync {
    /// Load the persisted contact list. Absent or malformed snapshots load
    /// as an empty list; only substrate failures are errors.
    fn load(&self) -> StorageResult<Vec<Contact>>;

    /// Serialize and persist the entire ordered list.
    fn save(&self, contacts: &[Contact]) -> StorageResult<()>;
}
