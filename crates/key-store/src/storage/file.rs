//! File-backed storage: one `<slot>.json` file per slot in a directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::Storage;
use crate::error::StorageError;

/// Extension appended to every slot file.
const SLOT_EXTENSION: &str = "json";

/// Slots stored as files under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open a storage directory, creating it if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            path: dir.clone(),
            source,
        })?;

        log::debug!("Opened file storage at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get path for a slot file.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        // Sanitize slot name for filesystem
        let sanitized: String = key
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '\0' => '_',
                c => c,
            })
            .collect();
        self.dir.join(format!("{sanitized}.{SLOT_EXTENSION}"))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    /// Writes go to a sibling temp file that is renamed over the slot, so
    /// readers see either the old or the new contents.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);
        let tmp_path = path.with_extension(format!(
            "{SLOT_EXTENSION}.{}.tmp",
            Uuid::now_v7().simple()
        ));

        if let Err(source) = fs::write(&tmp_path, value) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StorageError::Io {
                path: tmp_path,
                source,
            });
        }
        if let Err(source) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StorageError::Io { path, source });
        }
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested").join("store");

        let storage = FileStorage::open(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(storage.dir(), dir.as_path());
    }

    #[test]
    fn test_missing_slot_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path()).unwrap();
        assert_eq!(storage.get_item("localplayer_api_keys").unwrap(), None);
    }

    #[test]
    fn test_slot_persists_across_open() {
        let temp_dir = TempDir::new().unwrap();

        {
            let mut storage = FileStorage::open(temp_dir.path()).unwrap();
            storage.set_item("localplayer_api_keys", "[]").unwrap();
        }

        let storage = FileStorage::open(temp_dir.path()).unwrap();
        assert_eq!(
            storage.get_item("localplayer_api_keys").unwrap().as_deref(),
            Some("[]")
        );
        assert!(temp_dir.path().join("localplayer_api_keys.json").exists());
    }

    #[test]
    fn test_slot_name_sanitized() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path()).unwrap();

        let path = storage.slot_path("../escape/slot");
        assert_eq!(path, temp_dir.path().join(".._escape_slot.json"));
    }

    #[test]
    fn test_remove_missing_slot() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(temp_dir.path()).unwrap();

        storage.set_item("slot", "value").unwrap();
        storage.remove_item("slot").unwrap();
        storage.remove_item("slot").unwrap();
        assert_eq!(storage.get_item("slot").unwrap(), None);
    }

    #[test]
    fn test_overwrite_leaves_only_slot_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(temp_dir.path()).unwrap();

        storage.set_item("localplayer_api_keys", "[1]").unwrap();
        storage.set_item("localplayer_api_keys", "[]").unwrap();

        assert_eq!(
            storage.get_item("localplayer_api_keys").unwrap().as_deref(),
            Some("[]")
        );
        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["localplayer_api_keys.json"]);
    }

    #[test]
    fn test_failed_write_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(temp_dir.path()).unwrap();
        storage.set_item("slot", "old").unwrap();

        // A directory in place of the slot file makes the rename fail
        fs::remove_file(storage.slot_path("slot")).unwrap();
        fs::create_dir(storage.slot_path("slot")).unwrap();
        fs::write(storage.slot_path("slot").join("keep"), "").unwrap();

        let result = storage.set_item("slot", "new");
        assert!(matches!(result, Err(StorageError::Io { .. })));

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["slot.json"]);
    }
}
