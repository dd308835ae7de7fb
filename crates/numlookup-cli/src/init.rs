//! `numlookup init` — write a default config file.
//!
//! Only defaults are written; credentials from the environment stay there.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use numlookup_core::config::{get_config_path, save_config, Config};

/// Run the init command.
pub fn run() -> Result<()> {
    let config_path = get_config_path();

    if create_config(&config_path)? {
        println!("  {} created config at {}", "✓".green(), config_path.display());
    } else {
        println!(
            "  {} config already exists at {}",
            "✓".green(),
            config_path.display()
        );
    }
    println!(
        "  {}",
        "Set TWILIO_ACCOUNT_SID/TWILIO_AUTH_TOKEN or NUMBERLOOKUP_API_KEY/NUMBERLOOKUP_API_URL to leave demo mode."
            .dimmed()
    );
    Ok(())
}

/// Write a default config at `path` unless one exists. Returns whether it wrote.
fn create_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_config(&Config::default(), Some(path))
        .with_context(|| format!("failed to write config: {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".numlookup").join("config.json");

        assert!(create_config(&path).unwrap());
        assert!(path.exists());
        assert!(!create_config(&path).unwrap());

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["server"]["port"], 5000);
        assert_eq!(raw["twilio"]["accountSid"], "");
    }
}
