//! Filesystem-backed file store

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::sink::FileStore;

/// File store over the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileStore;

impl OsFileStore {
    /// Create a new filesystem store
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for OsFileStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create(&self, path: &Path) -> io::Result<()> {
        File::create(path).map(drop)
    }

    fn append(&self, path: &Path, text: &str) -> io::Result<()> {
        // No create flag: a file removed after logger construction is an
        // error on the logging call, not something to silently recreate.
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_makes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.log");
        let store = OsFileStore::new();

        assert!(!store.exists(&path));
        store.create(&path).unwrap();
        assert!(store.exists(&path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_create_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.log");
        std::fs::write(&path, "stale").unwrap();

        OsFileStore::new().create(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_append_adds_no_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.log");
        let store = OsFileStore::new();
        store.create(&path).unwrap();

        store.append(&path, "first").unwrap();
        store.append(&path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "firstsecond");
    }

    #[test]
    fn test_append_to_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.log");

        let err = OsFileStore::new().append(&path, "entry").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
