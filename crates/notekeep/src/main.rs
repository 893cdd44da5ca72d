//! notekeep - in-memory note service
//!
//! Main entry point for the notekeep CLI.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;

use commands::{openapi, start};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// notekeep - in-memory note service
#[derive(Parser)]
#[command(name = "notekeep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file (overrides default discovery)
    #[arg(long, global = true, env = "NOTEKEEP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the notekeep server
    Start(start::StartArgs),

    /// Print the OpenAPI document for the HTTP API
    Openapi(openapi::OpenapiArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = match cli.config {
        Some(ref path) => notekeep_config::LoadedConfig::from_file(path)?,
        None => notekeep_config::load_config(None)?,
    };

    let log_config = loaded.config.logging();
    let _guard = logging::init(
        cli.verbose,
        &log_config.level,
        log_config.directory.as_deref(),
    );

    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }
    for source in loaded.loaded_from() {
        tracing::debug!(path = %source.display(), "Loaded config");
    }

    let ctx = commands::Context {
        config: loaded.config,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Start(args) => start::run(args, &ctx).await,
        Commands::Openapi(args) => openapi::run(args, &ctx),
    }
}
