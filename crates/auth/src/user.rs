use serde::{Deserialize, Serialize};

use ledgerlink_core::AccountKey;

/// Identity of a user record in the delegate store.
///
/// Built by the caller's authentication layer, never by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserKey {
    pub bic: String,
    pub login: String,
}

/// Permission-scoped account key, as embedded in stored user records.
///
/// This shape exists only on the wire: its field names are part of the
/// delegate-store contract, so it cannot be collapsed into `AccountKey`
/// outright. Inside the registry it converts 1:1 into the canonical key via
/// [`PermissionAccountKey::account_key`] — that conversion is the single
/// place the two shapes meet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionAccountKey {
    /// Entry-type tag on the grant (distinct from the account's own type).
    #[serde(rename = "type")]
    pub entry_type: String,

    pub holder: String,

    pub owner: String,

    pub currency: String,

    #[serde(rename = "accountType")]
    pub account_type: String,
}

impl PermissionAccountKey {
    /// Convert into the canonical storage key (`accountType` maps to the
    /// account's `type`; the grant's own `type` tag is not a key field).
    pub fn account_key(&self) -> AccountKey {
        AccountKey {
            holder_bic: self.holder.clone(),
            owner_bic: self.owner.clone(),
            currency: self.currency.clone(),
            account_type: self.account_type.clone(),
        }
    }

    /// Build the grant-side shape for an existing account key.
    pub fn for_account(key: &AccountKey) -> Self {
        Self {
            entry_type: "account".to_string(),
            holder: key.holder_bic.clone(),
            owner: key.owner_bic.clone(),
            currency: key.currency.clone(),
            account_type: key.account_type.clone(),
        }
    }
}

/// A grant of a named access level over one account.
///
/// Permissions exist only as elements of a `UserDetails` record; they have
/// no independent identity or lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(rename = "accountKey")]
    pub key: PermissionAccountKey,

    /// Access level, e.g. "read" or "write". Opaque to the registry.
    pub access: String,
}

/// Full authorization record for one user.
///
/// The order of `permissions` determines the output order of the listing
/// operation, so it is load-bearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub password: String,

    pub permissions: Vec<Permission>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_key_converts_to_the_canonical_key() {
        let grant_key = PermissionAccountKey {
            entry_type: "account".to_string(),
            holder: "HOLDBIC1".to_string(),
            owner: "OWNRBIC1".to_string(),
            currency: "USD".to_string(),
            account_type: "CHECKING".to_string(),
        };

        let key = grant_key.account_key();
        assert_eq!(key.holder_bic, "HOLDBIC1");
        assert_eq!(key.owner_bic, "OWNRBIC1");
        assert_eq!(key.currency, "USD");
        assert_eq!(key.account_type, "CHECKING");

        // The conversion must be 1:1 both ways.
        assert_eq!(PermissionAccountKey::for_account(&key).account_key(), key);
    }

    #[test]
    fn user_details_wire_shape_is_stable() {
        let details = UserDetails {
            password: "secret".to_string(),
            permissions: vec![Permission {
                key: PermissionAccountKey {
                    entry_type: "account".to_string(),
                    holder: "A".to_string(),
                    owner: "B".to_string(),
                    currency: "USD".to_string(),
                    account_type: "CHECKING".to_string(),
                },
                access: "read".to_string(),
            }],
        };

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "password": "secret",
                "permissions": [{
                    "accountKey": {
                        "type": "account",
                        "holder": "A",
                        "owner": "B",
                        "currency": "USD",
                        "accountType": "CHECKING",
                    },
                    "access": "read",
                }],
            })
        );
    }
}
