//! `numlookup lookup` — one lookup from the command line.
//!
//! The number comes from `--number`, or from an interactive prompt when omitted.

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info};

use numlookup_core::config::load_config;
use numlookup_core::LookupOutcome;
use numlookup_providers::{lookup, ProviderConfig};

use crate::helpers;

const PROMPT: &str = "Enter the phone number: ";

/// Run the lookup command.
pub async fn run(number: Option<String>, json: bool) -> Result<()> {
    let number = match given_number(number) {
        Some(n) => n,
        None => match prompt_number()? {
            Some(n) => n,
            None => {
                println!("No number provided; exiting.");
                std::process::exit(1);
            }
        },
    };

    let config = load_config(None);
    let provider = ProviderConfig::select(&config);
    info!(provider = provider.name(), "looking up number");

    let outcome = lookup(&number, &provider).await;
    if json {
        println!("{}", render_json(&outcome)?);
    } else {
        helpers::print_outcome(&outcome);
    }
    Ok(())
}

/// `--number` value, treating an empty one as not given.
fn given_number(number: Option<String>) -> Option<String> {
    number.filter(|n| !n.is_empty())
}

fn render_json(outcome: &LookupOutcome) -> Result<String> {
    serde_json::to_string_pretty(outcome).context("failed to encode result")
}

/// Prompt for a number. `None` on Ctrl-C / Ctrl-D.
fn prompt_number() -> Result<Option<String>> {
    let mut editor = DefaultEditor::new().context("failed to open terminal for input")?;

    match editor.readline(PROMPT) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            debug!("prompt cancelled");
            Ok(None)
        }
        Err(e) => Err(e).context("failed to read phone number"),
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
