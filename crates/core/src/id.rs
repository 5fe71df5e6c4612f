use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::account::AccountKey;

/// Opaque, reversible account identifier handed out on read views.
///
/// The encoding is URL-safe base64 (no padding) of the canonical key JSON:
/// a caller can re-derive the exact `AccountKey` behind a view without the
/// registry exposing raw key fields. Ids are reversible by design — they
/// are addresses, not secrets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("account id is not valid base64")]
    Malformed,

    #[error("account id payload is not a canonical account key: {0}")]
    Payload(String),
}

impl AccountId {
    /// Encode the canonical id for `key`.
    pub fn from_key(key: &AccountKey) -> Result<Self, AccountIdError> {
        let bytes = serde_json::to_vec(key).map_err(|e| AccountIdError::Payload(e.to_string()))?;
        Ok(Self(URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Recover the exact `AccountKey` this id was built from.
    pub fn decode(&self) -> Result<AccountKey, AccountIdError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(&self.0)
            .map_err(|_| AccountIdError::Malformed)?;
        serde_json::from_slice(&bytes).map_err(|e| AccountIdError::Payload(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> AccountKey {
        AccountKey {
            holder_bic: "HOLDBIC1".to_string(),
            owner_bic: "OWNRBIC1".to_string(),
            currency: "USD".to_string(),
            account_type: "CHECKING".to_string(),
        }
    }

    #[test]
    fn id_round_trips_to_the_exact_key() {
        let key = test_key();
        let id = AccountId::from_key(&key).unwrap();
        assert_eq!(id.decode().unwrap(), key);
    }

    #[test]
    fn malformed_id_is_rejected() {
        let id = AccountId("not base64!!!".to_string());
        assert_eq!(id.decode().unwrap_err(), AccountIdError::Malformed);
    }

    #[test]
    fn valid_base64_with_wrong_payload_is_rejected() {
        let id = AccountId(URL_SAFE_NO_PAD.encode(b"{\"nope\":true}"));
        match id.decode().unwrap_err() {
            AccountIdError::Payload(_) => {}
            other => panic!("expected payload error, got {other:?}"),
        }
    }
}
