use std::sync::{Arc, OnceLock};

use thiserror::Error;

use ledgerlink_registry::AccountRegistry;
use ledgerlink_store::{DelegateStore, HttpDelegateStore, StoreError, StoreHandle};

/// Maps a store handle to a live delegate-store client.
pub type StoreConnector =
    Box<dyn Fn(&StoreHandle) -> Result<Arc<dyn DelegateStore>, StoreError> + Send + Sync>;

#[derive(Debug, Error)]
pub enum InitError {
    /// The store binding is write-once; there is no rebind path.
    #[error("delegate store is already bound")]
    AlreadyBound,

    #[error(transparent)]
    Connect(#[from] StoreError),
}

/// Process-wide service wiring.
///
/// The registry binding is the only mutable shared state in the process:
/// written once by `init`, read by every subsequent invocation.
pub struct AppState {
    registry: OnceLock<AccountRegistry<Arc<dyn DelegateStore>>>,
    connector: StoreConnector,
}

impl AppState {
    /// Production wiring: store handles are HTTP base URLs.
    pub fn http() -> Self {
        Self::with_connector(Box::new(|handle| {
            Ok(Arc::new(HttpDelegateStore::connect(handle)?) as Arc<dyn DelegateStore>)
        }))
    }

    /// Custom wiring (tests substitute an in-memory delegate store).
    pub fn with_connector(connector: StoreConnector) -> Self {
        Self {
            registry: OnceLock::new(),
            connector,
        }
    }

    /// Bind the delegate store for the lifetime of the process.
    ///
    /// A second bind is a conflict and leaves the original binding intact.
    pub fn bind_store(&self, handle: &StoreHandle) -> Result<(), InitError> {
        if self.registry.get().is_some() {
            return Err(InitError::AlreadyBound);
        }

        let store = (self.connector)(handle)?;
        self.registry
            .set(AccountRegistry::new(store))
            .map_err(|_| InitError::AlreadyBound)?;

        tracing::info!(handle = %handle, "delegate store bound");
        Ok(())
    }

    pub fn registry(&self) -> Option<&AccountRegistry<Arc<dyn DelegateStore>>> {
        self.registry.get()
    }
}
