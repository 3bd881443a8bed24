//! File-backed store: one `<key>.json` file per key

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::StatsStore;
use crate::config::project_dirs;
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Store in `dir`, or the platform data directory when `None`
    ///
    /// # Errors
    /// Returns `StoreError::NoDataDir` when no directory is given and the
    /// platform has none.
    pub fn open(dir: Option<&Path>) -> StoreResult<Self> {
        match dir {
            Some(dir) => Ok(Self::new(dir)),
            None => project_dirs()
                .map(|dirs| Self::new(dirs.data_dir()))
                .ok_or(StoreError::NoDataDir),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StatsStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, blob: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        tracing::debug!(path = %path.display(), bytes = blob.len(), "writing store entry");
        fs::write(&path, blob).map_err(|source| StoreError::Io { path, source })
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_none() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_file() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp.path().join("nested").join("data"));

        store.set("stats", "{}").unwrap();
        assert!(store.dir().join("stats.json").is_file());
        assert_eq!(store.get("stats").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn remove_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp.path());
        store.set("stats", "x").unwrap();

        store.remove("stats").unwrap();
        store.remove("stats").unwrap();
        assert_eq!(store.get("stats").unwrap(), None);
    }

    #[test]
    fn open_prefers_explicit_dir() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(Some(tmp.path())).unwrap();
        assert_eq!(store.dir(), tmp.path());
    }
}
