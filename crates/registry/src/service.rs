//! Account registration and permission-filtered listing.
//!
//! Both operations delegate all persistence to an injected [`DelegateStore`]
//! implementation, which keeps the registry testable against an in-memory
//! store and swappable to the production HTTP client without touching the
//! semantics here.

use chrono::{SecondsFormat, Utc};

use ledgerlink_auth::{IdentityToken, Permission, UserDetails};
use ledgerlink_core::{AccountId, AccountKey, AccountValue, AccountView};
use ledgerlink_store::DelegateStore;

use crate::error::RegistryError;

/// A request to register one account.
///
/// Fields are forwarded as-is: content validation (currency codes, numeric
/// amounts) belongs to the surrounding platform, not to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub holder_bic: String,
    pub owner_bic: String,
    pub number: String,
    pub amount: String,
    pub currency: String,
    pub account_type: String,
}

/// The account registry: registration plus permission-filtered listing.
///
/// Holds nothing but the store binding. Every operation is one atomic
/// request/response unit; nothing is cached between invocations.
#[derive(Debug)]
pub struct AccountRegistry<S> {
    store: S,
}

impl<S> AccountRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: DelegateStore> AccountRegistry<S> {
    /// Register an account: build the canonical key/value pair and forward
    /// a `put` to the delegate store.
    ///
    /// The stored `date` is generated here (UTC, RFC3339) so callers cannot
    /// supply their own timestamps, and the transaction log starts empty.
    /// Delegate failures propagate; whether a duplicate key overwrites or
    /// conflicts is the delegate's contract.
    pub async fn add_account(&self, account: NewAccount) -> Result<AccountKey, RegistryError> {
        let key = AccountKey {
            holder_bic: account.holder_bic,
            owner_bic: account.owner_bic,
            currency: account.currency.clone(),
            account_type: account.account_type.clone(),
        };
        let value = AccountValue {
            amount: account.amount,
            currency: account.currency,
            account_type: account.account_type,
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            number: account.number,
            transactions: Vec::new(),
        };

        let key_bytes = canonical(&key)?;
        let value_bytes = canonical(&value)?;
        self.store.put(&key_bytes, &value_bytes).await?;

        tracing::info!(
            holder = %key.holder_bic,
            owner = %key.owner_bic,
            currency = %key.currency,
            "account registered"
        );

        Ok(key)
    }

    /// List the accounts the token's user is permitted to see, in grant
    /// order, enriched from the delegate store.
    ///
    /// Grants whose account record is missing are skipped silently — the
    /// skip is load-bearing listing semantics, not an error. Everything
    /// else (malformed token, unreadable records, store failures) is
    /// reported and scoped to this invocation.
    pub async fn list_accounts(
        &self,
        token: &IdentityToken,
    ) -> Result<Vec<AccountView>, RegistryError> {
        let lookup_key = token.decode()?;

        let raw = self.store.get(&lookup_key).await?.ok_or_else(|| {
            RegistryError::Schema("no user record behind the presented token".to_string())
        })?;
        let details: UserDetails = serde_json::from_slice(&raw)
            .map_err(|e| RegistryError::Schema(format!("user details: {e}")))?;

        // Lookups run one at a time, but each hit keeps its grant index so a
        // concurrent execution strategy could be substituted without
        // disturbing the output order.
        let mut hits = Vec::with_capacity(details.permissions.len());
        for (index, grant) in details.permissions.iter().enumerate() {
            if let Some(view) = self.fetch_view(grant).await? {
                hits.push((index, view));
            }
        }
        hits.sort_by_key(|(index, _)| *index);

        Ok(hits.into_iter().map(|(_, view)| view).collect())
    }

    /// Resolve one grant to a view, or `None` if its account is missing.
    async fn fetch_view(&self, grant: &Permission) -> Result<Option<AccountView>, RegistryError> {
        let key = grant.key.account_key();
        let key_bytes = canonical(&key)?;

        let Some(raw) = self.store.get(&key_bytes).await? else {
            tracing::debug!(
                holder = %key.holder_bic,
                owner = %key.owner_bic,
                "no account record behind grant, skipping"
            );
            return Ok(None);
        };

        let value: AccountValue = serde_json::from_slice(&raw)
            .map_err(|e| RegistryError::Schema(format!("account value: {e}")))?;

        Ok(Some(AccountView {
            id: AccountId::from_key(&key)?,
            bic: grant.key.owner.clone(),
            number: value.number,
            amount: value.amount,
            currency: value.currency,
            account_type: value.account_type,
            last_activity: value.date,
            permissions: grant.access.clone(),
        }))
    }
}

fn canonical<T: serde::Serialize>(record: &T) -> Result<Vec<u8>, RegistryError> {
    serde_json::to_vec(record).map_err(|e| RegistryError::Encode(e.to_string()))
}
