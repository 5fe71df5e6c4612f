//! `ledgerlink-core` — domain foundation for the account registry.
//!
//! This crate contains **pure domain** types (no IO): the canonical account
//! key/value records exchanged with the delegate store, the read-side
//! `AccountView` projection, and the reversible account-id codec.
//!
//! The serde field names in this crate are a compatibility-sensitive wire
//! contract: external readers of the delegate store depend on the exact
//! shapes stored there.

pub mod account;
pub mod id;
pub mod view;

pub use account::{AccountKey, AccountState, AccountValue, Organization, Transaction};
pub use id::{AccountId, AccountIdError};
pub use view::AccountView;
