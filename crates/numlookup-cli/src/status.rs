//! `numlookup status` — show configuration and which provider is selected.
//!
//! Secrets are reported as set / not set, never printed.

use anyhow::Result;
use colored::Colorize;

use numlookup_core::config::{get_config_path, load_config};
use numlookup_providers::ProviderConfig;

use crate::helpers::status_mark;

/// Run the status command.
pub fn run() -> Result<()> {
    let config = load_config(None);
    let config_path = get_config_path();

    println!();
    println!("{}", "numlookup status".cyan().bold());
    println!();

    println!(
        "  {:<18} {} {}",
        "Config:".bold(),
        config_path.display(),
        if config_path.exists() {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );

    println!();
    println!("  {}", "Twilio:".bold());
    println!("    {:<20} {}", "Account SID", status_mark(!config.twilio.account_sid.is_empty()));
    println!("    {:<20} {}", "Auth token", status_mark(!config.twilio.auth_token.is_empty()));
    println!("    {:<20} {}", "API base", config.twilio.api_base_or_default());

    println!();
    println!("  {}", "Lookup API:".bold());
    println!("    {:<20} {}", "API key", status_mark(!config.api.api_key.is_empty()));
    if config.api.api_url.is_empty() {
        println!("    {:<20} {}", "API URL", status_mark(false));
    } else {
        println!("    {:<20} {}", "API URL", config.api.api_url);
    }

    println!();
    let provider = ProviderConfig::select(&config);
    let selected = match &provider {
        ProviderConfig::Demo => provider.name().yellow().bold(),
        _ => provider.name().green().bold(),
    };
    println!("  {:<18} {}", "Provider:".bold(), selected);
    println!(
        "  {:<18} {}:{}",
        "Web form:".bold(),
        config.server.host,
        config.server.port
    );
    println!();

    Ok(())
}
