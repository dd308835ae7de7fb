//! Configuration schema.
//!
//! Hierarchy: `Config` → `TwilioConfig`, `ApiConfig`, `ServerConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! We use `#[serde(rename_all = "camelCase")]` to handle the conversion.

use serde::{Deserialize, Serialize};

/// Default Twilio Lookup API base.
pub const DEFAULT_TWILIO_API_BASE: &str = "https://lookups.twilio.com/v1";

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.numlookup/config.json` + env vars.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub twilio: TwilioConfig,
    pub api: ApiConfig,
    pub server: ServerConfig,
}

// ─────────────────────────────────────────────
// Providers
// ─────────────────────────────────────────────

/// Twilio Lookup credentials.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TwilioConfig {
    /// Account SID (basic-auth username).
    pub account_sid: String,
    /// Auth token (basic-auth password).
    pub auth_token: String,
    /// Custom API base URL (overrides [`DEFAULT_TWILIO_API_BASE`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl TwilioConfig {
    /// Whether both the SID and the token are set.
    pub fn is_configured(&self) -> bool {
        !self.account_sid.is_empty() && !self.auth_token.is_empty()
    }

    /// API base to use, falling back to the public endpoint.
    pub fn api_base_or_default(&self) -> &str {
        self.api_base
            .as_deref()
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_TWILIO_API_BASE)
    }
}

/// Generic lookup API: a bearer key and the endpoint URL.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    pub api_key: String,
    pub api_url: String,
}

impl ApiConfig {
    /// Whether both the key and the URL are set.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.api_url.is_empty()
    }
}

// ─────────────────────────────────────────────
// Server
// ─────────────────────────────────────────────

/// Web form server settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
