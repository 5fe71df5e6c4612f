//! `ledgerlink-store` — boundary to the external key-value ledger.
//!
//! The delegate store is the authoritative owner of all account and user
//! records; the registry never persists data itself. This crate defines the
//! `put`/`get` wire contract as a trait plus two implementations: in-memory
//! (tests/dev) and HTTP-backed (production).

pub mod delegate;
pub mod http;
pub mod in_memory;

pub use delegate::{DelegateStore, StoreError, StoreHandle};
pub use http::HttpDelegateStore;
pub use in_memory::InMemoryDelegateStore;
