use reqwest::blocking::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::RemoteClient;
use crate::error::TransportError;

impl RemoteClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends once; no retries. Any non-2xx status is an error.
    pub(super) fn send(&self, req: RequestBuilder, label: &str) -> Result<Response, TransportError> {
        let resp = req.send().map_err(|source| TransportError::Request {
            label: label.to_string(),
            source,
        })?;
        let status = resp.status();
        debug!(label, status = status.as_u16(), "response");
        if !status.is_success() {
            return Err(TransportError::status(label, status.as_u16()));
        }
        Ok(resp)
    }

    pub(super) fn send_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        label: &str,
    ) -> Result<T, TransportError> {
        self.send(req, label)?
            .json()
            .map_err(|source| TransportError::Decode {
                label: label.to_string(),
                source,
            })
    }
}
