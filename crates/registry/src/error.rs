use thiserror::Error;

use ledgerlink_auth::TokenDecodeError;
use ledgerlink_core::AccountIdError;
use ledgerlink_store::StoreError;

/// Registry operation error.
///
/// Every failure is scoped to the invocation that hit it and reported to
/// the caller — a bad record or an unreachable delegate never faults the
/// process, and writes are never silently dropped. The one deliberate
/// non-error is a grant whose account record is missing during listing:
/// that is a designed, silent skip.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Wrong argument count for an entry point; the operation is not
    /// attempted.
    #[error("incorrect number of arguments for {function}: expected {expected}, got {got}")]
    Arity {
        function: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error(transparent)]
    TokenDecode(#[from] TokenDecodeError),

    /// A delegate-store response did not deserialize into the expected
    /// shape.
    #[error("delegate store returned an unreadable record: {0}")]
    Schema(String),

    /// An outgoing record could not be serialized.
    #[error("record serialization failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Id(#[from] AccountIdError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
