//! Lookup failures.
//!
//! The `Display` text of each variant is exactly what end users see, on the
//! web page and on the console, so the wording is fixed per provider.

use thiserror::Error;

/// A failed provider call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    // ── Twilio ──
    #[error("Twilio request failed: {0}")]
    TwilioTransport(String),

    #[error("Twilio API returned {status}: {body}")]
    TwilioStatus { status: u16, body: String },

    #[error("Invalid JSON response from Twilio.")]
    TwilioInvalidJson,

    // ── Generic API ──
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid JSON response from API.")]
    InvalidJson,
}

/// Provider-independent failure category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response: connection refused, DNS failure, timeout.
    Transport,
    /// A response with a non-success status.
    HttpStatus,
    /// A success response whose body is not JSON.
    JsonDecode,
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::TwilioTransport(_) | LookupError::Transport(_) => ErrorKind::Transport,
            LookupError::TwilioStatus { .. } | LookupError::Status { .. } => ErrorKind::HttpStatus,
            LookupError::TwilioInvalidJson | LookupError::InvalidJson => ErrorKind::JsonDecode,
        }
    }
}

/// Describe a reqwest error including its source chain.
///
/// reqwest's own message is often just "error sending request for url (...)";
/// the cause (timeout, refused connection, DNS) lives further down the chain.
pub(crate) fn describe_transport(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
