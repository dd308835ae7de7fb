//! Core types for numlookup — the normalized result of a phone lookup.
//!
//! Every provider (Twilio, a generic HTTP API, the demo responder) maps its own
//! response shape into [`PhoneDetails`]. A lookup call always ends in exactly
//! one [`LookupOutcome`]: either the six display fields or a single message.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Phone details
// ─────────────────────────────────────────────

/// Display labels, in the order results are printed and rendered.
pub const FIELD_LABELS: [&str; 6] = [
    "Number",
    "Name",
    "Location",
    "Carrier",
    "Country Code",
    "Phone Type",
];

/// The fixed six-field record produced by every provider.
///
/// Serialized with the human-readable labels as keys, so the JSON form reads
/// the same as the CLI and web output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneDetails {
    #[serde(rename = "Number")]
    pub number: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Carrier")]
    pub carrier: String,
    #[serde(rename = "Country Code")]
    pub country_code: String,
    #[serde(rename = "Phone Type")]
    pub phone_type: String,
}

impl PhoneDetails {
    /// Label/value pairs in display order.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            (FIELD_LABELS[0], self.number.as_str()),
            (FIELD_LABELS[1], self.name.as_str()),
            (FIELD_LABELS[2], self.location.as_str()),
            (FIELD_LABELS[3], self.carrier.as_str()),
            (FIELD_LABELS[4], self.country_code.as_str()),
            (FIELD_LABELS[5], self.phone_type.as_str()),
        ]
    }
}

// ─────────────────────────────────────────────
// Lookup outcome
// ─────────────────────────────────────────────

/// Result of one lookup call: details or an error message, never both.
///
/// Provider failures are folded into [`LookupOutcome::Error`] instead of being
/// propagated, so callers only branch and display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookupOutcome {
    Details(PhoneDetails),
    Error { error: String },
}

impl LookupOutcome {
    /// Create an error outcome.
    pub fn error(msg: impl Into<String>) -> Self {
        LookupOutcome::Error { error: msg.into() }
    }

    /// Whether this outcome carries an error message.
    pub fn is_error(&self) -> bool {
        matches!(self, LookupOutcome::Error { .. })
    }

    pub fn details(&self) -> Option<&PhoneDetails> {
        match self {
            LookupOutcome::Details(d) => Some(d),
            LookupOutcome::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LookupOutcome::Details(_) => None,
            LookupOutcome::Error { error } => Some(error),
        }
    }
}

impl From<PhoneDetails> for LookupOutcome {
    fn from(details: PhoneDetails) -> Self {
        LookupOutcome::Details(details)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
