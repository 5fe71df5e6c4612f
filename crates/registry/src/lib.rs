//! `ledgerlink-registry` — the account registry core.
//!
//! Two operations over an injected delegate store: registering account
//! records (`addAccount`) and listing the accounts a user's permission
//! grants cover (`listAccounts`), plus the function-name dispatch surface
//! the invoking runtime calls through. The registry owns no durable state;
//! everything lives in the delegate store.

pub mod dispatch;
pub mod error;
pub mod service;

pub use error::RegistryError;
pub use service::{AccountRegistry, NewAccount};
