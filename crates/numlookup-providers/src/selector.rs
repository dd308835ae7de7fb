//! Provider selection — which backend answers a lookup.
//!
//! Priority:
//! 1. Twilio, if both the account SID and the auth token are set
//! 2. The generic API, if both the key and the URL are set
//! 3. The demo responder
//!
//! Selection never fails; it falls through to [`ProviderConfig::Demo`].

use std::fmt;

use numlookup_core::config::{apply_overrides_from, Config};

/// Twilio basic-auth credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct TwilioCredentials {
    pub account_sid: String,
    pub auth_token: String,
}

impl fmt::Debug for TwilioCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioCredentials")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// The resolved backend for one lookup.
#[derive(Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    Twilio {
        credentials: TwilioCredentials,
        api_base: String,
    },
    Generic {
        api_key: String,
        api_url: String,
    },
    Demo,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderConfig::Twilio {
                credentials,
                api_base,
            } => f
                .debug_struct("Twilio")
                .field("credentials", credentials)
                .field("api_base", api_base)
                .finish(),
            ProviderConfig::Generic { api_url, .. } => f
                .debug_struct("Generic")
                .field("api_key", &"<redacted>")
                .field("api_url", api_url)
                .finish(),
            ProviderConfig::Demo => f.write_str("Demo"),
        }
    }
}

impl ProviderConfig {
    /// Pick the provider for a loaded configuration.
    pub fn select(config: &Config) -> Self {
        if config.twilio.is_configured() {
            return ProviderConfig::Twilio {
                credentials: TwilioCredentials {
                    account_sid: config.twilio.account_sid.clone(),
                    auth_token: config.twilio.auth_token.clone(),
                },
                api_base: config.twilio.api_base_or_default().to_string(),
            };
        }

        if config.api.is_configured() {
            return ProviderConfig::Generic {
                api_key: config.api.api_key.clone(),
                api_url: config.api.api_url.clone(),
            };
        }

        ProviderConfig::Demo
    }

    /// Pick the provider straight from a key/value source (e.g. the environment).
    pub fn from_source<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::select(&apply_overrides_from(Config::default(), get))
    }

    /// Short name for logs and status output.
    pub fn name(&self) -> &'static str {
        match self {
            ProviderConfig::Twilio { .. } => "twilio",
            ProviderConfig::Generic { .. } => "generic",
            ProviderConfig::Demo => "demo",
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
