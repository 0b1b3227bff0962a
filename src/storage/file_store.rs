use std::fs;
use std::path::PathBuf;

use super::{KeyValueStore, Result, StorageError};

/// File-backed store: one `<key>.json` file per key under a base directory.
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `base_path`, creating the directory if needed.
    pub fn new(base_path: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("flashmind"))
            .ok_or(StorageError::DataDirNotFound)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    /// Atomic write: write to `.tmp`, then rename over the target.
    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_load_absent_key() {
        let (store, _temp) = create_test_store();
        assert_eq!(store.load("nothing").unwrap(), None);
    }

    #[test]
    fn test_save_and_load() {
        let (store, _temp) = create_test_store();

        store.save("greeting", "{\"hello\":\"world\"}").unwrap();
        let loaded = store.load("greeting").unwrap();
        assert_eq!(loaded.as_deref(), Some("{\"hello\":\"world\"}"));
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let (store, _temp) = create_test_store();

        store.save("counter", "1").unwrap();
        store.save("counter", "2").unwrap();
        assert_eq!(store.load("counter").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_keys_are_independent_files() {
        let (store, temp) = create_test_store();

        store.save("a", "1").unwrap();
        store.save("b", "2").unwrap();
        assert!(temp.path().join("a.json").exists());
        assert!(temp.path().join("b.json").exists());
        assert_eq!(store.load("a").unwrap().as_deref(), Some("1"));
    }
}
