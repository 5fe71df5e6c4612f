//! `ledgerlink-auth` — user/permission model and the identity-token codec.
//!
//! This crate is intentionally decoupled from HTTP and storage: it defines
//! the authorization records read from the delegate store and the opaque
//! credential callers present to the listing operation. Nothing here is
//! ever created or mutated by the registry — user records are owned by the
//! surrounding platform.

pub mod token;
pub mod user;

pub use token::{IdentityToken, TokenDecodeError};
pub use user::{Permission, PermissionAccountKey, UserDetails, UserKey};
