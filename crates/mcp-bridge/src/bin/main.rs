//! Hyperfabric MCP server
//!
//! Exposes the Hyperfabric REST API to MCP clients over stdio. The spec
//! must already carry the `/api/v1/` prefix (see `openapi-prefix-paths`).
//! The API token is read from `HYPERFABRIC_API_TOKEN`, optionally via a
//! `.env` file in the working directory.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, warn};

use mcp_bridge::{
    BootstrapResult, BridgeConfig, BridgeContext, OpenApiBridge, DEFAULT_BASE_URL,
    DEFAULT_SERVER_NAME, DEFAULT_SPEC_PATH, DEFAULT_TOKEN_VAR,
};

/// Hyperfabric MCP server - Hyperfabric REST API as MCP tools
#[derive(Parser, Debug)]
#[command(name = "hyperfabric-mcp-server")]
#[command(version)]
#[command(about = "Serve the Hyperfabric OpenAPI spec as MCP tools over stdio")]
struct Args {
    /// OpenAPI JSON spec with prefixed paths
    #[arg(long, default_value = DEFAULT_SPEC_PATH)]
    spec: PathBuf,

    /// Base URL every tool call is sent to
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Environment variable holding the API token
    #[arg(long, default_value = DEFAULT_TOKEN_VAR)]
    token_var: String,

    /// Server name reported to MCP clients
    #[arg(long, default_value = DEFAULT_SERVER_NAME)]
    name: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    // A missing .env is fine; the token may come from the real environment
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> BootstrapResult<()> {
    let config = BridgeConfig::new(args.spec, &args.base_url)?
        .with_token_var(args.token_var)
        .with_server_name(args.name);

    let ctx = BridgeContext::initialize(&config, |var| std::env::var(var).ok())?;
    ctx.serve(&OpenApiBridge).await
}
