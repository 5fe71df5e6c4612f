use serde::{Deserialize, Serialize};

use crate::id::AccountId;

/// Read-side projection of one account, merged with the requesting user's
/// access level for it.
///
/// `permissions` carries the access string from the grant that produced the
/// view. It is not an account field — in particular it must not be confused
/// with the account's intrinsic `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    /// Reversible encoding of the key this view was fetched with.
    pub id: AccountId,

    /// Owner BIC from the grant that produced the view.
    pub bic: String,

    pub number: String,

    pub amount: String,

    pub currency: String,

    #[serde(rename = "type")]
    pub account_type: String,

    #[serde(rename = "lastActivity")]
    pub last_activity: String,

    /// Access level granted to the requesting user.
    pub permissions: String,
}
