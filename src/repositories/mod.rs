mod file;
mod json_snapshot;
mod memory;
mod traits;

pub use file::FileKeyValueStore;
pub use json_snapshot::{JsonSnapshotRepository, CONTACTS_KEY};
pub use memory::MemoryKeyValueStore;
pub use traits::{KeyValueStore, SnapshotRepository};
