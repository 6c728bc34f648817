//! Prefix every route of a Hyperfabric OpenAPI spec
//!
//! The Hyperfabric API publishes its spec with bare routes while the
//! gateway serves them under `/api/v1/`. This rewrites the spec so that
//! generated tools call the right URLs.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

use openapi_spec::{PrefixJob, DEFAULT_PATH_PREFIX};

const DEFAULT_SPEC_FILE: &str = "/mnt/c/OPENAPI_MCP/hf_spec.json";
const DEFAULT_OUTPUT_FILE: &str = "/mnt/c/OPENAPI_MCP/hf_spec_modified.json";

/// Add a prefix to all paths in an OpenAPI v3 JSON spec
#[derive(Parser, Debug)]
#[command(name = "openapi-prefix-paths")]
#[command(version)]
#[command(about = "Add a prefix to all paths in an OpenAPI v3 JSON spec")]
struct Args {
    /// OpenAPI JSON file to read
    #[arg(long, default_value = DEFAULT_SPEC_FILE)]
    input: PathBuf,

    /// Where to write the modified spec
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE, conflicts_with = "in_place")]
    output: PathBuf,

    /// Overwrite the input file instead of writing to --output
    #[arg(long)]
    in_place: bool,

    /// Prefix added in front of every path
    #[arg(long, default_value = DEFAULT_PATH_PREFIX)]
    prefix: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut job = PrefixJob::new(args.input, args.prefix);

    info!("Attempting to modify paths in: {}", job.input.display());
    if args.in_place {
        warn!("Original file will be overwritten!");
    } else {
        info!("Saving modified spec to: {}", args.output.display());
        job = job.with_output(args.output);
    }

    match job.run() {
        Ok(_) => {
            info!("Modification complete.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
