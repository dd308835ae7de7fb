//! Generic lookup API client.
//!
//! `GET {api_url}?number=<number>` with `Authorization: Bearer <api_key>`.
//! The response shape is loose; see [`normalize_generic`] for the field mapping.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, error};

use numlookup_core::{LookupOutcome, PhoneDetails};

use crate::error::{describe_transport, LookupError};
use crate::normalize::normalize_generic;
use crate::traits::LookupProvider;
use crate::REQUEST_TIMEOUT;

/// Bearer-token lookup provider for any configured endpoint.
pub struct GenericProvider {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for GenericProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericProvider")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl GenericProvider {
    pub fn new(client: reqwest::Client, api_key: &str, api_url: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            api_url: api_url.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn fetch(&self, number: &str) -> Result<PhoneDetails, LookupError> {
        debug!(provider = "API", url = %self.api_url, "looking up number");

        let response = self
            .client
            .get(&self.api_url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .query(&[("number", number)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| LookupError::Transport(describe_transport(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(describe_transport(&e)))?;

        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = serde_json::from_str(&body).map_err(|_| LookupError::InvalidJson)?;

        Ok(normalize_generic(&data, number))
    }
}

#[async_trait]
impl LookupProvider for GenericProvider {
    async fn lookup(&self, number: &str) -> LookupOutcome {
        match self.fetch(number).await {
            Ok(details) => details.into(),
            Err(e) => {
                error!(provider = "API", kind = ?e.kind(), error = %e, "lookup failed");
                LookupOutcome::error(e.to_string())
            }
        }
    }

    fn display_name(&self) -> &str {
        "Lookup API"
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
