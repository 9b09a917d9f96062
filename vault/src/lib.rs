//! Minimal character vault API client.
//!
//! This crate provides a focused client for the remote character vault with:
//! - A single write operation: submit a character document
//! - Typed errors distinguishing transport failures from API rejections
//! - Environment-based configuration for the endpoint

use serde::Serialize;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://recruiting.verylongdomaintotestwith.ca";

/// Errors that can occur when using the vault client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Vault username not configured")]
    NoUsername,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Character vault API client.
///
/// Documents are submitted to `<base>/api/<username>/character`. The vault
/// keeps one document per username; every submit overwrites the previous one.
#[derive(Clone)]
pub struct Vault {
    client: reqwest::Client,
    base_url: String,
    username: String,
}

impl Vault {
    /// Create a new vault client for the given username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: DEFAULT_BASE_URL.to_string(),
            username: username.into(),
        }
    }

    /// Create a vault client from environment variables.
    ///
    /// Requires `VAULT_USERNAME`; `VAULT_BASE_URL` overrides the default host.
    pub fn from_env() -> Result<Self, Error> {
        let username = std::env::var("VAULT_USERNAME").map_err(|_| Error::NoUsername)?;
        let mut vault = Self::new(username);
        if let Ok(base_url) = std::env::var("VAULT_BASE_URL") {
            vault = vault.with_base_url(base_url);
        }
        Ok(vault)
    }

    /// Override the vault host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// The username this client submits under.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The full endpoint URL documents are submitted to.
    pub fn endpoint(&self) -> String {
        format!("{}/api/{}/character", self.base_url, self.username)
    }

    /// Submit a character document, overwriting any previous submission.
    ///
    /// Any 2xx response counts as success. Non-success responses are returned
    /// as [`Error::Api`] with the response body as the message.
    pub async fn submit<T: Serialize>(&self, document: &T) -> Result<(), Error> {
        let endpoint = self.endpoint();
        tracing::debug!(endpoint = %endpoint, "submitting character document");

        let response = self
            .client
            .post(&endpoint)
            .json(document)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_construction() {
        let vault = Vault::new("gmalik-dev");
        assert_eq!(
            vault.endpoint(),
            "https://recruiting.verylongdomaintotestwith.ca/api/gmalik-dev/character"
        );
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let vault = Vault::new("tester").with_base_url("http://localhost:8080/");
        assert_eq!(vault.endpoint(), "http://localhost:8080/api/tester/character");
    }

    #[test]
    fn test_error_display() {
        let err = Error::Api {
            status: 503,
            message: "service unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (status 503): service unavailable"
        );
    }

    #[tokio::test]
    async fn test_submit_to_unreachable_host_is_network_error() {
        // Port 1 is reserved and unbound; the connect must fail fast.
        let vault = Vault::new("tester").with_base_url("http://127.0.0.1:1");
        let result = vault.submit(&serde_json::json!({"attributes": []})).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
