//! OpenAPI → MCP bridge
//!
//! Turning OpenAPI operations into MCP tools and routing tool calls is
//! done by `rmcp-openapi`; this module only feeds it the spec and the
//! authenticated client settings, then runs it on stdio.

use async_trait::async_trait;
use rmcp::ServiceExt;
use serde_json::Value;
use tracing::info;

use crate::client::ApiClient;
use crate::error::{BootstrapError, BootstrapResult};

/// Builds a runnable MCP server from an OpenAPI document and a client
pub trait BridgeFactory: Send + Sync {
    fn build(
        &self,
        spec: Value,
        client: &ApiClient,
        name: &str,
    ) -> BootstrapResult<Box<dyn BridgeServer>>;
}

/// A built MCP server, ready to serve
#[async_trait]
pub trait BridgeServer: Send {
    /// Number of tools generated from the spec
    fn tool_count(&self) -> usize;

    /// Serve until the client disconnects or the server fails
    async fn serve(self: Box<Self>) -> BootstrapResult<()>;
}

/// Bridge backed by `rmcp-openapi`, served over stdio
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenApiBridge;

impl BridgeFactory for OpenApiBridge {
    fn build(
        &self,
        spec: Value,
        client: &ApiClient,
        name: &str,
    ) -> BootstrapResult<Box<dyn BridgeServer>> {
        let mut server = rmcp_openapi::Server::builder()
            .openapi_spec(spec)
            .base_url(client.base_url().clone())
            .default_headers(client.default_headers().clone())
            .name(name.to_string())
            .build();

        server
            .load_openapi_spec()
            .map_err(|e| BootstrapError::Bridge(e.to_string()))?;

        info!("Generated {} MCP tools for {}", server.tool_count(), name);
        Ok(Box::new(OpenApiBridgeServer { server }))
    }
}

struct OpenApiBridgeServer {
    server: rmcp_openapi::Server,
}

#[async_trait]
impl BridgeServer for OpenApiBridgeServer {
    fn tool_count(&self) -> usize {
        self.server.tool_count()
    }

    async fn serve(self: Box<Self>) -> BootstrapResult<()> {
        info!("Starting MCP server on stdio");

        let running = self
            .server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| BootstrapError::Serve(e.to_string()))?;

        let reason = running
            .waiting()
            .await
            .map_err(|e| BootstrapError::Serve(e.to_string()))?;

        info!("MCP server stopped: {:?}", reason);
        Ok(())
    }
}
