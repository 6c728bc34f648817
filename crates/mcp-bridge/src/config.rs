//! Bootstrap configuration

use std::path::PathBuf;
use url::Url;

use crate::error::{BootstrapError, BootstrapResult};
use crate::secret::ApiToken;

/// Spec written by `openapi-prefix-paths`
pub const DEFAULT_SPEC_PATH: &str = "/mnt/c/OPENAPI_MCP/hf_spec_modified.json";
pub const DEFAULT_BASE_URL: &str = "https://hyperfabric.cisco.com";
pub const DEFAULT_TOKEN_VAR: &str = "HYPERFABRIC_API_TOKEN";
pub const DEFAULT_SERVER_NAME: &str = "Hyperfabric_MCP_API_Server";

/// Everything needed to bring the bridge up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// OpenAPI JSON document to serve
    pub spec_path: PathBuf,
    /// Origin every generated tool calls
    pub base_url: Url,
    /// Environment variable holding the bearer token
    pub token_var: String,
    /// Name the MCP server reports to clients
    pub server_name: String,
}

impl BridgeConfig {
    pub fn new(spec_path: impl Into<PathBuf>, base_url: &str) -> BootstrapResult<Self> {
        Ok(Self {
            spec_path: spec_path.into(),
            base_url: Url::parse(base_url)?,
            token_var: DEFAULT_TOKEN_VAR.to_string(),
            server_name: DEFAULT_SERVER_NAME.to_string(),
        })
    }

    pub fn with_token_var(mut self, var: impl Into<String>) -> Self {
        self.token_var = var.into();
        self
    }

    pub fn with_server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = name.into();
        self
    }

    /// Read the bearer token through `lookup` (normally `std::env::var`)
    pub fn resolve_token<F>(&self, lookup: F) -> BootstrapResult<ApiToken>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        lookup(&self.token_var)
            .and_then(ApiToken::new)
            .ok_or_else(|| BootstrapError::MissingToken {
                var: self.token_var.clone(),
            })
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            spec_path: PathBuf::from(DEFAULT_SPEC_PATH),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            token_var: DEFAULT_TOKEN_VAR.to_string(),
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}
