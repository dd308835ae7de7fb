//! Phone lookup provider layer for numlookup.
//!
//! # Architecture
//!
//! - [`traits::LookupProvider`] — trait that all providers implement
//! - [`selector::ProviderConfig`] — which backend to use, resolved from config
//! - [`twilio::TwilioProvider`] — Twilio Lookup v1 client
//! - [`generic::GenericProvider`] — bearer-token HTTP API client
//! - [`demo::DemoProvider`] — fixed placeholder data, no network
//! - [`lookup::lookup`] — one-call entry point: config in, outcome out

pub mod demo;
pub mod error;
pub mod generic;
pub mod lookup;
pub mod normalize;
pub mod selector;
pub mod traits;
pub mod twilio;

// Re-export main types for convenience
pub use demo::DemoProvider;
pub use error::{ErrorKind, LookupError};
pub use generic::GenericProvider;
pub use lookup::{create_provider, lookup, lookup_with_client};
pub use selector::{ProviderConfig, TwilioCredentials};
pub use traits::LookupProvider;
pub use twilio::TwilioProvider;

/// Per-request timeout for every outbound lookup.
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);
