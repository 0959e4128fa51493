//! `auracle-mcp`: serve the Auracle tools to an MCP client over stdio.

use std::process;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use auracle_mcp::config::{Config, ConfigError};
use auracle_mcp::mcp::{McpServer, ToolContext};
use auracle_mcp::program::{AuracleClient, RpcLedger};

/// Stdout carries protocol frames, so logs go to stderr.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "auracle_mcp=debug,warn"
    } else {
        "auracle_mcp=info,warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        // --help and --version
        Err(ConfigError::Args(e)) if !e.use_stderr() => e.exit(),
        Err(e) => {
            init_logging(false);
            error!(error = %e, "Invalid configuration");
            process::exit(1);
        }
    };
    init_logging(config.verbose);

    let ledger = Arc::new(RpcLedger::new(&config.rpc_url));
    let client = AuracleClient::new(
        ledger,
        Arc::new(config.wallet),
        config.program_id,
        config.auracle_mint,
    );
    info!(
        rpc_url = %config.rpc_url,
        program_id = %client.program_id,
        wallet = %client.payer(),
        "Starting auracle-mcp"
    );

    let server = McpServer::new(ToolContext::new(client));
    if let Err(e) = server.run_stdio().await {
        error!(error = %e, "Server stopped");
        process::exit(1);
    }
}
