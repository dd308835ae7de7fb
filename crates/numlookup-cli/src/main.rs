//! numlookup CLI — entry point.
//!
//! # Commands
//!
//! - `numlookup lookup [-n NUMBER] [--json]` — look up one number (prompts if omitted)
//! - `numlookup serve [--host HOST] [--port PORT]` — web form
//! - `numlookup status` — show configuration and the selected provider
//! - `numlookup init` — write a default config file

mod helpers;
mod init;
mod lookup_cmd;
mod pages;
mod server;
mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Lookup phone number details (demo data if no provider is configured).
#[derive(Parser)]
#[command(name = "numlookup", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a phone number and print its details
    Lookup {
        /// Phone number to lookup (e.g. +15555555555). Prompted for if omitted.
        #[arg(short, long)]
        number: Option<String>,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Serve the lookup web form
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Show configuration and provider status
    Status,

    /// Write a default config file
    Init,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup { number, json, logs } => {
            init_logging(logs, "off");
            lookup_cmd::run(number, json).await
        }
        Commands::Serve { host, port, logs } => {
            init_logging(logs, "numlookup=info,warn");
            server::run(host, port).await
        }
        Commands::Status => status::run(),
        Commands::Init => init::run(),
    }
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool, quiet_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("numlookup=debug,numlookup_providers=debug,numlookup_core=debug,tower_http=debug,info")
    } else {
        EnvFilter::new(quiet_filter)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
