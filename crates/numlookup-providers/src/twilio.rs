//! Twilio Lookup v1 client.
//!
//! `GET {api_base}/PhoneNumbers/{number}?Type=carrier&Type=caller-name`
//! with the account SID and auth token as basic-auth credentials.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error};

use numlookup_core::{LookupOutcome, PhoneDetails};

use crate::error::{describe_transport, LookupError};
use crate::normalize::{display_value, normalize_twilio};
use crate::selector::TwilioCredentials;
use crate::traits::LookupProvider;
use crate::REQUEST_TIMEOUT;

/// Data facets requested on every lookup.
const LOOKUP_TYPES: [(&str, &str); 2] = [("Type", "carrier"), ("Type", "caller-name")];

/// Twilio Lookup provider.
pub struct TwilioProvider {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    /// API base URL (e.g. `"https://lookups.twilio.com/v1"`).
    api_base: String,
    timeout: Duration,
}

impl std::fmt::Debug for TwilioProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioProvider")
            .field("api_base", &self.api_base)
            .field("account_sid", &self.account_sid)
            .finish()
    }
}

impl TwilioProvider {
    pub fn new(client: reqwest::Client, credentials: &TwilioCredentials, api_base: &str) -> Self {
        Self {
            client,
            account_sid: credentials.account_sid.clone(),
            auth_token: credentials.auth_token.clone(),
            api_base: api_base.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the lookup URL, with `number` as a single escaped path segment.
    fn lookup_url(&self, number: &str) -> Result<reqwest::Url, LookupError> {
        let base = self.api_base.trim_end_matches('/');
        let mut url = reqwest::Url::parse(&format!("{base}/PhoneNumbers"))
            .map_err(|e| LookupError::TwilioTransport(format!("invalid URL {base:?}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::TwilioTransport(format!("invalid URL {base:?}")))?
            .push(number);
        Ok(url)
    }

    async fn fetch(&self, number: &str) -> Result<PhoneDetails, LookupError> {
        let url = self.lookup_url(number)?;

        debug!(provider = "Twilio", url = %url, "looking up number");

        let response = self
            .client
            .get(url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .query(&LOOKUP_TYPES)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| LookupError::TwilioTransport(describe_transport(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::TwilioTransport(describe_transport(&e)))?;

        if !status.is_success() {
            // JSON payloads: strings bare, structures in mapping notation. Anything else raw.
            let body = match serde_json::from_str::<Value>(&body) {
                Ok(json) => display_value(&json),
                Err(_) => body,
            };
            return Err(LookupError::TwilioStatus {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value =
            serde_json::from_str(&body).map_err(|_| LookupError::TwilioInvalidJson)?;

        Ok(normalize_twilio(&data, number))
    }
}

#[async_trait]
impl LookupProvider for TwilioProvider {
    async fn lookup(&self, number: &str) -> LookupOutcome {
        match self.fetch(number).await {
            Ok(details) => {
                debug!(provider = "Twilio", carrier = %details.carrier, "lookup complete");
                details.into()
            }
            Err(e) => {
                error!(provider = "Twilio", kind = ?e.kind(), error = %e, "lookup failed");
                LookupOutcome::error(e.to_string())
            }
        }
    }

    fn display_name(&self) -> &str {
        "Twilio"
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
