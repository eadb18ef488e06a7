// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::service::{ConfigError, ConfigStore};

/// [`ConfigStore`] kept in process memory.
///
/// Clones share one document map, so a session keeps a handle after giving
/// a clone to a [`ConfigService`](crate::ConfigService).
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigStore {
    documents: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one document.
    pub fn with_document(key: &str, document: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.documents().insert(key.to_owned(), document.into());
        store
    }

    fn documents(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.documents.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Raw document under `key`.
    pub fn document(&self, key: &str) -> Option<Vec<u8>> {
        self.documents().get(key).cloned()
    }

    /// `true` when a document is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.documents().contains_key(key)
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError> {
        Ok(self.document(key))
    }

    fn write(&self, key: &str, document: &[u8]) -> Result<(), ConfigError> {
        self.documents().insert(key.to_owned(), document.to_vec());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_documents() {
        let a = InMemoryConfigStore::new();
        let b = a.clone();
        a.write("orbit", b"{}").unwrap();
        assert_eq!(b.read("orbit").unwrap().as_deref(), Some(&b"{}"[..]));
        assert!(b.contains_key("orbit"));
    }

    #[test]
    fn missing_key_reads_as_none() {
        let store = InMemoryConfigStore::new();
        assert!(store.read("nope").unwrap().is_none());
    }

    #[test]
    fn write_replaces_previous_document() {
        let store = InMemoryConfigStore::with_document("k", "old");
        store.write("k", b"new").unwrap();
        assert_eq!(store.document("k").as_deref(), Some(&b"new"[..]));
    }
}
