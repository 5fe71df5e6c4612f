use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::user::UserKey;

/// Opaque credential presented by a caller to resolve their user record.
///
/// The token is standard base64 over the delegate-store lookup key for the
/// caller's `UserDetails` — typically the canonical serialization of a
/// `UserKey`, but the registry treats the payload as opaque bytes. Decoding
/// is fail-fast: a malformed token is an error, never a garbage lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityToken(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenDecodeError {
    #[error("identity token is not valid base64")]
    Malformed,

    #[error("identity token payload could not be built: {0}")]
    Payload(String),
}

impl IdentityToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Encode a token whose payload is the canonical serialization of
    /// `user_key`. This is what transport-level authentication layers are
    /// expected to hand out.
    pub fn for_user_key(user_key: &UserKey) -> Result<Self, TokenDecodeError> {
        let payload =
            serde_json::to_vec(user_key).map_err(|e| TokenDecodeError::Payload(e.to_string()))?;
        Ok(Self(STANDARD.encode(payload)))
    }

    /// Decode the raw lookup-key payload.
    pub fn decode(&self) -> Result<Vec<u8>, TokenDecodeError> {
        STANDARD.decode(&self.0).map_err(|_| TokenDecodeError::Malformed)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
