//! Function-name dispatch for the invoking runtime.
//!
//! Mirrors the host call surface: state-changing entry points arrive via
//! `invoke`, read-only ones via `query`, both with positional string
//! arguments. Arity is enforced here, before any side effect; unknown
//! function names are rejected without touching the delegate store.

use ledgerlink_auth::IdentityToken;
use ledgerlink_store::DelegateStore;

use crate::error::RegistryError;
use crate::service::{AccountRegistry, NewAccount};

impl<S: DelegateStore> AccountRegistry<S> {
    /// Dispatch a state-changing operation by function name.
    pub async fn invoke(&self, function: &str, args: &[String]) -> Result<(), RegistryError> {
        match function {
            "addAccount" => {
                expect_arity("addAccount", args, 6)?;
                self.add_account(NewAccount {
                    holder_bic: args[0].clone(),
                    owner_bic: args[1].clone(),
                    number: args[2].clone(),
                    amount: args[3].clone(),
                    currency: args[4].clone(),
                    account_type: args[5].clone(),
                })
                .await?;
                Ok(())
            }
            other => Err(RegistryError::UnsupportedOperation(other.to_string())),
        }
    }

    /// Dispatch a read-only operation by function name.
    ///
    /// Returns the canonical serialization of the result, ready for the
    /// transport to hand back verbatim.
    pub async fn query(&self, function: &str, args: &[String]) -> Result<Vec<u8>, RegistryError> {
        match function {
            "listAccounts" => {
                expect_arity("listAccounts", args, 1)?;
                let token = IdentityToken::new(args[0].clone());
                let views = self.list_accounts(&token).await?;
                serde_json::to_vec(&views).map_err(|e| RegistryError::Encode(e.to_string()))
            }
            other => Err(RegistryError::UnsupportedOperation(other.to_string())),
        }
    }
}

fn expect_arity(
    function: &'static str,
    args: &[String],
    expected: usize,
) -> Result<(), RegistryError> {
    if args.len() != expected {
        return Err(RegistryError::Arity {
            function,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use ledgerlink_auth::{Permission, PermissionAccountKey, UserDetails, UserKey};
    use ledgerlink_core::AccountView;
    use ledgerlink_store::InMemoryDelegateStore;

    fn test_registry() -> (
        AccountRegistry<Arc<InMemoryDelegateStore>>,
        Arc<InMemoryDelegateStore>,
    ) {
        let store = Arc::new(InMemoryDelegateStore::new());
        (AccountRegistry::new(store.clone()), store)
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn add_account_requires_exactly_six_arguments() {
        let (registry, store) = test_registry();

        let five = args(&["A", "B", "123", "100", "USD"]);
        let err = registry.invoke("addAccount", &five).await.unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Arity {
                expected: 6,
                got: 5,
                ..
            }
        ));

        let seven = args(&["A", "B", "123", "100", "USD", "CHECKING", "extra"]);
        let err = registry.invoke("addAccount", &seven).await.unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Arity {
                expected: 6,
                got: 7,
                ..
            }
        ));

        // Neither attempt reached the delegate store.
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn list_accounts_requires_exactly_one_argument() {
        let (registry, _store) = test_registry();

        let err = registry.query("listAccounts", &[]).await.unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Arity {
                expected: 1,
                got: 0,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn unknown_function_names_are_rejected_without_side_effects() {
        let (registry, store) = test_registry();

        let err = registry
            .invoke("deleteAccount", &args(&["A"]))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnsupportedOperation(_)));

        let err = registry
            .query("listEverything", &args(&["token"]))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnsupportedOperation(_)));

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn register_then_list_through_the_dispatch_surface() {
        let (registry, store) = test_registry();

        registry
            .invoke(
                "addAccount",
                &args(&["HOLD1", "OWNR1", "40702", "2500", "EUR", "SETTLEMENT"]),
            )
            .await
            .unwrap();

        let user_key = UserKey {
            bic: "USERBIC1".to_string(),
            login: "alice".to_string(),
        };
        let details = UserDetails {
            password: "pw".to_string(),
            permissions: vec![Permission {
                key: PermissionAccountKey {
                    entry_type: "account".to_string(),
                    holder: "HOLD1".to_string(),
                    owner: "OWNR1".to_string(),
                    currency: "EUR".to_string(),
                    account_type: "SETTLEMENT".to_string(),
                },
                access: "read".to_string(),
            }],
        };
        let token = IdentityToken::for_user_key(&user_key).unwrap();
        store
            .put(
                &token.decode().unwrap(),
                &serde_json::to_vec(&details).unwrap(),
            )
            .await
            .unwrap();

        let raw = registry
            .query("listAccounts", &args(&[token.as_str()]))
            .await
            .unwrap();
        let views: Vec<AccountView> = serde_json::from_slice(&raw).unwrap();

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].number, "40702");
        assert_eq!(views[0].bic, "OWNR1");
        assert_eq!(views[0].permissions, "read");
    }
}
