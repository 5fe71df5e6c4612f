use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::delegate::{DelegateStore, StoreError};

/// In-memory delegate store.
///
/// Intended for tests/dev. Duplicate `put`s overwrite (the laxest delegate
/// conflict contract). Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryDelegateStore {
    records: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl InMemoryDelegateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DelegateStore for InMemoryDelegateStore {
    async fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        records.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        Ok(records.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_returns_the_record() {
        let store = InMemoryDelegateStore::new();
        store.put(b"key", b"value").await.unwrap();
        assert_eq!(store.get(b"key").await.unwrap(), Some(b"value".to_vec()));
    }

    #[tokio::test]
    async fn missing_record_is_none_not_error() {
        let store = InMemoryDelegateStore::new();
        assert_eq!(store.get(b"absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_put_overwrites() {
        let store = InMemoryDelegateStore::new();
        store.put(b"key", b"first").await.unwrap();
        store.put(b"key", b"second").await.unwrap();
        assert_eq!(store.get(b"key").await.unwrap(), Some(b"second".to_vec()));
        assert_eq!(store.len(), 1);
    }
}
