use serde::Deserialize;

use ledgerlink_store::StoreHandle;

/// Body of `POST /init`: exactly one store handle.
#[derive(Debug, Deserialize)]
pub struct InitRequest {
    #[serde(rename = "storeHandle")]
    pub store_handle: StoreHandle,
}

/// Body of `POST /invoke` and `POST /query`: a function name plus its
/// positional string arguments. Arity is checked by the registry, not here.
#[derive(Debug, Deserialize)]
pub struct CallRequest {
    pub function: String,

    #[serde(default)]
    pub args: Vec<String>,
}
