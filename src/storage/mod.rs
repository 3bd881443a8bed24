//! Scorecard persistence
//!
//! [`StatsStore`] is a narrow key-value seam. [`Scorecard`] keeps one
//! [`PlayerStats`](crate::scoring::PlayerStats) record in it as JSON.

mod file;
mod scorecard;

pub use file::FileStore;
pub use scorecard::{STATS_KEY, Scorecard};

use rustc_hash::FxHashMap;

use crate::error::StoreResult;

/// Key-value blob store
pub trait StatsStore {
    /// Blob stored under `key`, if any
    ///
    /// # Errors
    /// Returns `StoreError` when the backing storage cannot be read.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `blob` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns `StoreError` when the backing storage cannot be written.
    fn set(&mut self, key: &str, blob: &str) -> StoreResult<()>;

    /// Delete `key`; deleting a missing key is not an error
    ///
    /// # Errors
    /// Returns `StoreError` when the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// Store that lives only as long as the process
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blobs: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, blob: &str) -> StoreResult<()> {
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.blobs.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
