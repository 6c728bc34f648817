//! Bring the bridge from configuration to a serving MCP server
//!
//! Everything that can fail before serving happens in
//! [`BridgeContext::initialize`]: loading the spec, reading the token and
//! building the client settings. Only a fully initialized context can be
//! started, and starting yields a [`ServingBridge`] in
//! [`BootstrapState::Serving`].

use serde_json::Value;
use tracing::{debug, info};

use openapi_spec::SpecDocument;

use crate::bridge::{BridgeFactory, BridgeServer};
use crate::client::ApiClient;
use crate::config::BridgeConfig;
use crate::error::BootstrapResult;

/// Lifecycle of the bridge process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootstrapState {
    /// Loading spec, validating token, building client
    #[default]
    Initializing,
    /// Blocked in the bridge's run loop
    Serving,
}

/// Loaded spec plus authenticated client, ready to serve
#[derive(Debug)]
pub struct BridgeContext {
    spec: Value,
    client: ApiClient,
    server_name: String,
}

impl BridgeContext {
    /// Load the spec and build the client settings.
    ///
    /// `lookup` resolves environment variables; the token is read before
    /// any client is built so a missing credential never reaches the network.
    pub fn initialize<F>(config: &BridgeConfig, lookup: F) -> BootstrapResult<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let doc = SpecDocument::load(&config.spec_path)?;
        if let Some(source) = doc.source() {
            info!("OpenAPI spec loaded successfully from {}", source.display());
        }
        if let Some(spec_info) = doc.info() {
            info!("   Title: {}", spec_info.title);
            info!(
                "   Version: {}",
                spec_info.version.as_deref().unwrap_or("unknown")
            );
        }

        let token = config.resolve_token(lookup)?;
        info!("Using token: {}", token.masked());

        let client = ApiClient::new(config.base_url.clone(), &token)?;
        debug!("HTTP client bound to {}", client.base_url());

        Ok(Self {
            spec: doc.into_value(),
            client,
            server_name: config.server_name.clone(),
        })
    }

    pub fn state(&self) -> BootstrapState {
        BootstrapState::Initializing
    }

    pub fn spec(&self) -> &Value {
        &self.spec
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// Build the MCP server from the spec and client
    pub fn start(self, factory: &dyn BridgeFactory) -> BootstrapResult<ServingBridge> {
        let server = factory.build(self.spec, &self.client, &self.server_name)?;

        info!(
            "Serving {} with {} tools",
            self.server_name,
            server.tool_count()
        );

        Ok(ServingBridge {
            server,
            server_name: self.server_name,
        })
    }

    /// Build the MCP server and serve until it stops
    pub async fn serve(self, factory: &dyn BridgeFactory) -> BootstrapResult<()> {
        self.start(factory)?.run().await
    }
}

/// A built MCP server that has left initialization
pub struct ServingBridge {
    server: Box<dyn BridgeServer>,
    server_name: String,
}

impl ServingBridge {
    pub fn state(&self) -> BootstrapState {
        BootstrapState::Serving
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    pub fn tool_count(&self) -> usize {
        self.server.tool_count()
    }

    /// Block in the bridge's run loop until it terminates
    pub async fn run(self) -> BootstrapResult<()> {
        debug!("Bootstrap state: {:?}", self.state());
        self.server.serve().await
    }
}

impl std::fmt::Debug for ServingBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServingBridge")
            .field("server_name", &self.server_name)
            .field("tool_count", &self.tool_count())
            .finish()
    }
}
