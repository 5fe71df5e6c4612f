use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity of the delegate store, established once at initialization and
/// read on every subsequent operation. There is no rebind path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreHandle(String);

impl StoreHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for StoreHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Delegate-store operation error.
///
/// These are boundary failures (connectivity, rejected operations). A
/// missing record is **not** an error — `get` reports it as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store handle is not usable: {0}")]
    InvalidHandle(String),

    #[error("delegate store unreachable: {0}")]
    Unavailable(String),

    #[error("delegate store rejected the operation: {0}")]
    Rejected(String),

    #[error("delegate store client failure: {0}")]
    Internal(String),
}

/// The external key-value ledger this registry delegates all persistence to.
///
/// Keys and values are the canonical serialization of the domain records;
/// this trait moves bytes and nothing else. Conflict semantics for `put`
/// (overwrite vs reject) belong to the delegate, not to this contract.
#[async_trait]
pub trait DelegateStore: Send + Sync {
    /// Store or overwrite the record at `key`.
    async fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Read the record at `key`. A missing record is `Ok(None)`.
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
}

#[async_trait]
impl<S> DelegateStore for Arc<S>
where
    S: DelegateStore + ?Sized,
{
    async fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        (**self).put(key, value).await
    }

    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key).await
    }
}
