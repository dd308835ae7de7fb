//! One-call lookup: resolved provider config in, outcome out.

use tracing::debug;

use numlookup_core::LookupOutcome;

use crate::demo::DemoProvider;
use crate::generic::GenericProvider;
use crate::selector::ProviderConfig;
use crate::traits::LookupProvider;
use crate::twilio::TwilioProvider;

/// Build the provider for a resolved config.
///
/// `client` is only used by the HTTP providers; the demo responder ignores it.
pub fn create_provider(config: &ProviderConfig, client: reqwest::Client) -> Box<dyn LookupProvider> {
    match config {
        ProviderConfig::Twilio {
            credentials,
            api_base,
        } => Box::new(TwilioProvider::new(client, credentials, api_base)),
        ProviderConfig::Generic { api_key, api_url } => {
            Box::new(GenericProvider::new(client, api_key, api_url))
        }
        ProviderConfig::Demo => Box::new(DemoProvider),
    }
}

/// Look up `number` with a fresh HTTP client.
pub async fn lookup(number: &str, config: &ProviderConfig) -> LookupOutcome {
    match config {
        // No client needed.
        ProviderConfig::Demo => DemoProvider.lookup(number).await,
        _ => lookup_with_client(number, config, reqwest::Client::new()).await,
    }
}

/// Look up `number` reusing an existing client's connection pool.
pub async fn lookup_with_client(
    number: &str,
    config: &ProviderConfig,
    client: reqwest::Client,
) -> LookupOutcome {
    let provider = create_provider(config, client);
    debug!(provider = provider.display_name(), "dispatching lookup");
    provider.lookup(number).await
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
