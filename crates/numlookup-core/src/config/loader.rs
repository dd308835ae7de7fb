//! Config loader — reads `~/.numlookup/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.numlookup/config.json`
//! 3. Environment variables (override JSON)
//!
//! Credential variables are looked up under a preferred name first and a
//! `NUMBERLOOKUP_`-prefixed name second. Empty values count as unset.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::Config;

/// `(preferred, fallback)` names for the Twilio account SID.
pub const TWILIO_SID_KEYS: &[&str] = &["TWILIO_ACCOUNT_SID", "NUMBERLOOKUP_TWILIO_ACCOUNT_SID"];
/// `(preferred, fallback)` names for the Twilio auth token.
pub const TWILIO_TOKEN_KEYS: &[&str] = &["TWILIO_AUTH_TOKEN", "NUMBERLOOKUP_TWILIO_AUTH_TOKEN"];
pub const TWILIO_API_BASE_KEY: &str = "NUMBERLOOKUP_TWILIO_API_BASE";
pub const API_KEY_KEY: &str = "NUMBERLOOKUP_API_KEY";
pub const API_URL_KEY: &str = "NUMBERLOOKUP_API_URL";
pub const SERVER_HOST_KEY: &str = "NUMBERLOOKUP_SERVER__HOST";
pub const SERVER_PORT_KEY: &str = "NUMBERLOOKUP_SERVER__PORT";

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the default path + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path
        .map(PathBuf::from)
        .unwrap_or_else(get_config_path);

    apply_env_overrides(load_config_file(&config_path))
}

/// Load config from a specific file path, without env overrides.
fn load_config_file(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            Config::default()
        }
    }
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path
        .map(PathBuf::from)
        .unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::other)?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply process environment overrides on top of a loaded config.
pub fn apply_env_overrides(config: Config) -> Config {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary key/value source.
///
/// Supported keys:
/// - `TWILIO_ACCOUNT_SID` | `NUMBERLOOKUP_TWILIO_ACCOUNT_SID` → `twilio.account_sid`
/// - `TWILIO_AUTH_TOKEN` | `NUMBERLOOKUP_TWILIO_AUTH_TOKEN` → `twilio.auth_token`
/// - `NUMBERLOOKUP_TWILIO_API_BASE` → `twilio.api_base`
/// - `NUMBERLOOKUP_API_KEY` → `api.api_key`
/// - `NUMBERLOOKUP_API_URL` → `api.api_url`
/// - `NUMBERLOOKUP_SERVER__HOST` → `server.host`
/// - `NUMBERLOOKUP_SERVER__PORT` → `server.port`
pub fn apply_overrides_from<F>(mut config: Config, get: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = first_present(&get, TWILIO_SID_KEYS) {
        config.twilio.account_sid = val;
    }
    if let Some(val) = first_present(&get, TWILIO_TOKEN_KEYS) {
        config.twilio.auth_token = val;
    }
    if let Some(val) = first_present(&get, &[TWILIO_API_BASE_KEY]) {
        config.twilio.api_base = Some(val);
    }

    if let Some(val) = first_present(&get, &[API_KEY_KEY]) {
        config.api.api_key = val;
    }
    if let Some(val) = first_present(&get, &[API_URL_KEY]) {
        config.api.api_url = val;
    }

    if let Some(val) = first_present(&get, &[SERVER_HOST_KEY]) {
        config.server.host = val;
    }
    if let Some(val) = first_present(&get, &[SERVER_PORT_KEY]) {
        match val.parse::<u16>() {
            Ok(p) => config.server.port = p,
            Err(_) => warn!("Ignoring invalid {}: {}", SERVER_PORT_KEY, val),
        }
    }

    config
}

/// First non-empty value among `keys`, in order.
fn first_present<F>(get: &F, keys: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    keys.iter()
        .filter_map(|key| get(key))
        .find(|val| !val.is_empty())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_missing_file() {
        let config = load_config_file(Path::new("/nonexistent/path/config.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_valid_json() {
        let file = write_temp_json(r#"{
            "api": {
                "apiKey": "k-123",
                "apiUrl": "https://lookup.example.com/v1"
            }
        }"#);

        let config = load_config_file(file.path());
        assert!(config.api.is_configured());
        assert_eq!(config.api.api_url, "https://lookup.example.com/v1");
        // Default preserved
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_load_invalid_json_returns_defaults() {
        let file = write_temp_json("not valid json {{{");
        let config = load_config_file(file.path());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.twilio.account_sid = "AC-test".to_string();
        config.server.port = 8081;

        save_config(&config, Some(&path)).unwrap();

        let reloaded = load_config_file(&path);
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_preferred_key_wins() {
        let config = apply_overrides_from(
            Config::default(),
            env(&[
                ("TWILIO_ACCOUNT_SID", "AC-preferred"),
                ("NUMBERLOOKUP_TWILIO_ACCOUNT_SID", "AC-fallback"),
            ]),
        );
        assert_eq!(config.twilio.account_sid, "AC-preferred");
    }

    #[test]
    fn test_fallback_key_used_when_preferred_missing() {
        let config = apply_overrides_from(
            Config::default(),
            env(&[
                ("NUMBERLOOKUP_TWILIO_ACCOUNT_SID", "AC-fallback"),
                ("NUMBERLOOKUP_TWILIO_AUTH_TOKEN", "tok-fallback"),
            ]),
        );
        assert_eq!(config.twilio.account_sid, "AC-fallback");
        assert_eq!(config.twilio.auth_token, "tok-fallback");
        assert!(config.twilio.is_configured());
    }

    #[test]
    fn test_empty_preferred_falls_through() {
        let config = apply_overrides_from(
            Config::default(),
            env(&[
                ("TWILIO_AUTH_TOKEN", ""),
                ("NUMBERLOOKUP_TWILIO_AUTH_TOKEN", "tok-fallback"),
            ]),
        );
        assert_eq!(config.twilio.auth_token, "tok-fallback");
    }

    #[test]
    fn test_empty_env_keeps_file_value() {
        let mut base = Config::default();
        base.api.api_key = "from-file".into();
        let config = apply_overrides_from(base, env(&[("NUMBERLOOKUP_API_KEY", "")]));
        assert_eq!(config.api.api_key, "from-file");
    }

    #[test]
    fn test_generic_api_overrides() {
        let config = apply_overrides_from(
            Config::default(),
            env(&[
                ("NUMBERLOOKUP_API_KEY", "k-env"),
                ("NUMBERLOOKUP_API_URL", "https://lookup.example.com"),
            ]),
        );
        assert!(config.api.is_configured());
        assert!(!config.twilio.is_configured());
    }

    #[test]
    fn test_server_overrides() {
        let config = apply_overrides_from(
            Config::default(),
            env(&[
                ("NUMBERLOOKUP_SERVER__HOST", "127.0.0.1"),
                ("NUMBERLOOKUP_SERVER__PORT", "9999"),
            ]),
        );
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9999);
    }

    #[test]
    fn test_invalid_port_ignored() {
        let config = apply_overrides_from(
            Config::default(),
            env(&[("NUMBERLOOKUP_SERVER__PORT", "not-a-port")]),
        );
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_twilio_api_base_override() {
        let config = apply_overrides_from(
            Config::default(),
            env(&[("NUMBERLOOKUP_TWILIO_API_BASE", "http://127.0.0.1:9000")]),
        );
        assert_eq!(config.twilio.api_base_or_default(), "http://127.0.0.1:9000");
    }
}
