//! Shared building blocks for numlookup: result types, configuration, and
//! small utilities used by both the provider clients and the binary.

pub mod config;
pub mod types;
pub mod utils;

pub use types::{LookupOutcome, PhoneDetails, FIELD_LABELS};
