use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use reqwest::StatusCode;

use crate::delegate::{DelegateStore, StoreError, StoreHandle};

/// HTTP-backed delegate store client.
///
/// The store handle is the base URL of the delegate's state API. Records
/// are addressed as `{base}/state/{url-safe-base64(key)}`; `PUT` stores,
/// `GET` reads, and 404 is the not-found signal. Timeouts and cancellation
/// are whatever the underlying client provides — the registry imposes no
/// policy of its own.
#[derive(Debug, Clone)]
pub struct HttpDelegateStore {
    base: String,
    client: reqwest::Client,
}

impl HttpDelegateStore {
    /// Build a client for the delegate identified by `handle`.
    ///
    /// Fails if the handle does not parse as an absolute URL.
    pub fn connect(handle: &StoreHandle) -> Result<Self, StoreError> {
        reqwest::Url::parse(handle.as_str())
            .map_err(|e| StoreError::InvalidHandle(format!("{}: {e}", handle.as_str())))?;

        Ok(Self {
            base: handle.as_str().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        })
    }

    fn record_url(&self, key: &[u8]) -> String {
        format!("{}/state/{}", self.base, URL_SAFE_NO_PAD.encode(key))
    }
}

#[async_trait]
impl DelegateStore for HttpDelegateStore {
    async fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.record_url(key))
            .body(value.to_vec())
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Rejected(format!(
                "put returned {}",
                response.status()
            )));
        }

        Ok(())
    }

    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let response = self
            .client
            .get(self.record_url(key))
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?;
                Ok(Some(bytes.to_vec()))
            }
            status => Err(StoreError::Rejected(format!("get returned {status}"))),
        }
    }
}
