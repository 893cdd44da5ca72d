//! Start command - launches the notekeep server.

use std::net::SocketAddr;

use anyhow::{Context as _, Result};
use clap::Args;
use tracing::info;

use notekeep_config::ServerSection;
use notekeep_server::{Server, ServerConfig};

use super::Context;

/// Arguments for the start command.
///
/// CLI arguments override config file values.
#[derive(Args, Debug)]
pub struct StartArgs {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind to (overrides config)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Disable per-request logging
    #[arg(long)]
    pub no_request_logging: bool,
}

/// Apply CLI overrides on top of the configured server section.
fn resolve_server_section(mut section: ServerSection, args: &StartArgs) -> ServerSection {
    if let Some(port) = args.port {
        section.port = port;
    }
    if let Some(ref bind) = args.bind {
        section.bind = bind.clone();
    }
    if args.no_request_logging {
        section.request_logging = false;
    }
    section
}

fn build_server_config(section: &ServerSection) -> Result<ServerConfig> {
    let addr: SocketAddr = section
        .socket_addr()
        .context("invalid server address")?;

    Ok(ServerConfig::new()
        .with_bind_address(addr)
        .with_request_logging(section.request_logging)
        .with_max_body_size(section.max_body_size))
}

/// Run the start command.
pub async fn run(args: StartArgs, ctx: &Context) -> Result<()> {
    let section = resolve_server_section(ctx.config.server(), &args);
    let config = build_server_config(&section)?;

    if ctx.verbose {
        info!(
            bind = %config.bind_address,
            request_logging = config.request_logging,
            max_body_size = config.max_body_size,
            "Resolved server configuration"
        );
    }

    let server = Server::new(config);
    let addr = server.bind_address();
    server.run_with_shutdown(addr, shutdown_signal()).await?;

    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        // Without a signal handler there is nothing to wait for; keep serving.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
