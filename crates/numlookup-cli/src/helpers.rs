//! Shared CLI helpers — result formatting and printing.

use colored::Colorize;

use numlookup_core::LookupOutcome;

const HEADER: &str = "--- Phone Details ---";
const FOOTER: &str = "---------------------";

/// Key/value lines for an outcome, one per field, or a single `error:` line.
pub fn outcome_lines(outcome: &LookupOutcome) -> Vec<(&'static str, String)> {
    match outcome {
        LookupOutcome::Details(details) => details
            .fields()
            .iter()
            .map(|(label, value)| (*label, value.to_string()))
            .collect(),
        LookupOutcome::Error { error } => vec![("error", error.clone())],
    }
}

/// Plain-text report, as printed (without colors).
pub fn format_outcome(outcome: &LookupOutcome) -> String {
    let mut out = format!("\n{HEADER}\n");
    for (key, value) in outcome_lines(outcome) {
        out.push_str(&format!("{key}: {value}\n"));
    }
    out.push_str(FOOTER);
    out
}

/// Print a lookup outcome to stdout.
pub fn print_outcome(outcome: &LookupOutcome) {
    if !colored::control::SHOULD_COLORIZE.should_colorize() {
        println!("{}", format_outcome(outcome));
        return;
    }

    println!();
    println!("{}", HEADER.cyan().bold());
    for (key, value) in outcome_lines(outcome) {
        if outcome.is_error() {
            println!("{}: {}", key.red().bold(), value);
        } else {
            println!("{}: {}", key.bold(), value);
        }
    }
    println!("{}", FOOTER.cyan());
}

/// Render a status marker: green check when set, dimmed note otherwise.
pub fn status_mark(set: bool) -> String {
    if set {
        format!("{} (set)", "✓".green())
    } else {
        format!("{}", "· not set".dimmed())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
