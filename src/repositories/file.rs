use crate::error::StorageResult;
use crate::repositories::KeyValueStore;
use std::fs;
use std::io;
use std::path::PathBuf;

/// File-backed key-value store, one file per key under a data directory.
///
/// Keys map to `<dir>/<key>.json`. The directory is created lazily on the
/// first write.
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> FileKeyValueStore {
        let dir = std::env::temp_dir().join(format!("agenda-kv-{}", Uuid::new_v4()));
        FileKeyValueStore::new(dir)
    }

    #[test]
    fn test_get_absent_key() {
        let store = temp_store();
        assert_eq!(store.get("contacts").unwrap(), None);
    }

    #[test]
    fn test_set_creates_dir_and_roundtrips() {
        let store = temp_store();
        store.set("contacts", r#"[{"id":"1"}]"#).unwrap();
        assert_eq!(
            store.get("contacts").unwrap().as_deref(),
            Some(r#"[{"id":"1"}]"#)
        );
    }

    #[test]
    fn test_set_overwrites() {
        let store = temp_store();
        store.set("contacts", "[]").unwrap();
        store.set("contacts", r#"["x"]"#).unwrap();
        assert_eq!(store.get("contacts").unwrap().as_deref(), Some(r#"["x"]"#));
    }
}
