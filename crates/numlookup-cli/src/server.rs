//! `numlookup serve` — the lookup web form.
//!
//! Routes:
//! - `GET /` — the form
//! - `POST /lookup` — form field `number`; renders the result page
//!
//! Config is loaded once at startup. The provider is resolved per request,
//! and all requests share one HTTP client pool.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use numlookup_core::config::{load_config, Config};
use numlookup_providers::{lookup_with_client, ProviderConfig};

use crate::pages;

/// Shared server state.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct LookupForm {
    #[serde(default)]
    number: String,
}

/// Build the router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/lookup", post(lookup_number))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(pages::index_page())
}

async fn lookup_number(
    State(state): State<AppState>,
    form: Option<Form<LookupForm>>,
) -> Html<String> {
    // A missing or non-form body means an empty number.
    let form = form.map(|Form(f)| f).unwrap_or_default();
    let provider = ProviderConfig::select(&state.config);
    debug!(provider = provider.name(), "web lookup");

    let outcome = lookup_with_client(&form.number, &provider, state.client.clone()).await;
    Html(pages::result_page(&form.number, &outcome))
}

/// Run the web server until interrupted.
pub async fn run(host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = load_config(None);
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let provider = ProviderConfig::select(&config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(addr = %addr, provider = provider.name(), "numlookup web form listening");
    println!("  Listening on http://{addr} (provider: {})", provider.name());

    axum::serve(listener, router(AppState::new(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("web server failed")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl+C: {e}");
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
