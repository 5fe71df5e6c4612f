use serde::{Deserialize, Serialize};

/// Canonical identity of an account record in the delegate store.
///
/// This is the **single** key shape used for storage and lookup. All four
/// fields must be non-empty for the key to resolve to a real account. Keys
/// are constructed fresh on every operation, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountKey {
    #[serde(rename = "holderBic")]
    pub holder_bic: String,

    #[serde(rename = "ownerBic")]
    pub owner_bic: String,

    pub currency: String,

    #[serde(rename = "type")]
    pub account_type: String,
}

/// Stored account record (the value half of an `AccountKey` entry).
///
/// `date` is an RFC3339 UTC timestamp assigned server-side at creation time;
/// callers never supply it. `transactions` is an ordered, append-only log
/// owned by whatever process executes transfers — the registry writes it
/// empty at creation and never mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountValue {
    pub amount: String,

    pub currency: String,

    #[serde(rename = "type")]
    pub account_type: String,

    pub date: String,

    pub number: String,

    // Records written before the transaction log existed omit the field.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// A party to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub bic: String,
    pub name: String,
}

/// One executed transfer, as recorded on an account's transaction log.
///
/// Amounts, fees, and statuses stay strings end to end: the registry reads
/// back what the transfer executor wrote without reinterpreting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: Organization,

    pub receiver: Organization,

    pub fee: String,

    pub amount: String,

    pub status: String,

    pub comment: String,

    /// Snapshot of the account header after this transfer was applied.
    pub state: AccountState,
}

/// Account-header snapshot carried on a transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    pub amount: String,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_key_wire_shape_is_stable() {
        let key = AccountKey {
            holder_bic: "HOLDBIC1".to_string(),
            owner_bic: "OWNRBIC1".to_string(),
            currency: "USD".to_string(),
            account_type: "CHECKING".to_string(),
        };

        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "holderBic": "HOLDBIC1",
                "ownerBic": "OWNRBIC1",
                "currency": "USD",
                "type": "CHECKING",
            })
        );
    }

    #[test]
    fn account_value_without_transaction_log_still_deserializes() {
        // Shape written by pre-log revisions of the registry.
        let raw = serde_json::json!({
            "amount": "100",
            "currency": "USD",
            "type": "CHECKING",
            "date": "2026-01-05T12:00:00Z",
            "number": "123",
        });

        let value: AccountValue = serde_json::from_value(raw).unwrap();
        assert!(value.transactions.is_empty());
        assert_eq!(value.amount, "100");
    }

    #[test]
    fn transaction_log_round_trips() {
        let value = AccountValue {
            amount: "250".to_string(),
            currency: "EUR".to_string(),
            account_type: "SETTLEMENT".to_string(),
            date: "2026-01-05T12:00:00Z".to_string(),
            number: "40702".to_string(),
            transactions: vec![Transaction {
                sender: Organization {
                    bic: "SENDBIC1".to_string(),
                    name: "Sender Bank".to_string(),
                },
                receiver: Organization {
                    bic: "RECVBIC1".to_string(),
                    name: "Receiver Bank".to_string(),
                },
                fee: "1".to_string(),
                amount: "50".to_string(),
                status: "completed".to_string(),
                comment: "settlement".to_string(),
                state: AccountState {
                    amount: "250".to_string(),
                    date: "2026-01-05T12:00:00Z".to_string(),
                },
            }],
        };

        let bytes = serde_json::to_vec(&value).unwrap();
        let back: AccountValue = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, value);
    }
}
