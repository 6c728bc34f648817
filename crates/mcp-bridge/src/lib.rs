//! # mcp-bridge
//!
//! Bootstraps an MCP server for the Hyperfabric API.
//! Loads the prefixed OpenAPI spec, builds a bearer-authenticated HTTP
//! client and hands both to an OpenAPI → MCP bridge served over stdio.

mod bootstrap;
pub mod bridge;
mod client;
mod config;
mod error;
mod secret;

pub use bootstrap::{BootstrapState, BridgeContext, ServingBridge};
pub use bridge::{BridgeFactory, BridgeServer, OpenApiBridge};
pub use client::ApiClient;
pub use config::{BridgeConfig, DEFAULT_BASE_URL, DEFAULT_SERVER_NAME, DEFAULT_SPEC_PATH, DEFAULT_TOKEN_VAR};
pub use error::{BootstrapError, BootstrapResult};
pub use secret::ApiToken;
