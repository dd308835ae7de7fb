//! Demo responder — used when no provider is configured.

use async_trait::async_trait;
use tracing::debug;

use numlookup_core::{LookupOutcome, PhoneDetails};

use crate::traits::LookupProvider;

/// Returns fixed placeholder details without touching the network.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoProvider;

impl DemoProvider {
    pub fn details(number: &str) -> PhoneDetails {
        PhoneDetails {
            number: number.to_string(),
            name: "John Doe (demo)".to_string(),
            location: "San Francisco CA".to_string(),
            carrier: "Demo Carrier".to_string(),
            country_code: "+1".to_string(),
            phone_type: "mobile".to_string(),
        }
    }
}

#[async_trait]
impl LookupProvider for DemoProvider {
    async fn lookup(&self, number: &str) -> LookupOutcome {
        debug!("no provider configured, returning demo data");
        Self::details(number).into()
    }

    fn display_name(&self) -> &str {
        "Demo"
    }
}
