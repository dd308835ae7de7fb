//! Lookup provider trait — the seam between the selector and the HTTP clients.

use async_trait::async_trait;
use numlookup_core::LookupOutcome;

/// Trait that all phone lookup providers must implement.
#[async_trait]
pub trait LookupProvider: Send + Sync {
    /// Look up a single phone number.
    ///
    /// The number is passed through as entered; no format validation happens here.
    /// On transport, status, or decode failures, returns `LookupOutcome::error(...)`
    /// instead of propagating.
    async fn lookup(&self, number: &str) -> LookupOutcome;

    /// Display name for logging.
    fn display_name(&self) -> &str;
}
