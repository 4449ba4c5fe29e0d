use anyhow::{anyhow, Result};
use tracing::debug;

/// HTTP client for the listener service.
pub struct ListenerClient {
    listener_url: String,
    http_client: reqwest::Client,
}

impl ListenerClient {
    pub fn new(listener_url: String) -> Self {
        Self {
            listener_url,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.listener_url
    }

    /// Issue a single GET to the listener and return its JSON body verbatim.
    ///
    /// Any failure (connect error, timeout, non-2xx status, body that is
    /// not JSON) comes back as an error; there is no retry.
    pub async fn call(&self) -> Result<serde_json::Value> {
        debug!("Calling listener at {}", self.listener_url);

        let response = self.http_client.get(&self.listener_url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "listener returned error status: {}",
                response.status()
            ));
        }

        let body: serde_json::Value = response.json().await?;
        Ok(body)
    }
}
