//! Utility helpers — data paths and HTML escaping.

use std::path::PathBuf;

/// Get the numlookup data directory (e.g. `~/.numlookup/`).
pub fn get_data_path() -> PathBuf {
    let home = dirs_next::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".numlookup")
}

/// Escape a value for inclusion in HTML text or attribute content.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
