//! Configuration system — schema, loading, and env var overrides.
//!
//! # Usage
//! ```no_run
//! use numlookup_core::config;
//!
//! let cfg = config::load_config(None);
//! println!("Twilio configured: {}", cfg.twilio.is_configured());
//! ```

pub mod loader;
pub mod schema;

// Re-export key types
pub use loader::{apply_env_overrides, apply_overrides_from, get_config_path, load_config, save_config};
pub use schema::{ApiConfig, Config, ServerConfig, TwilioConfig};
