//! Error types for the bridge bootstrap

use thiserror::Error;

/// Result type alias for bootstrap operations
pub type BootstrapResult<T> = std::result::Result<T, BootstrapError>;

/// Bootstrap error types
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Spec(#[from] openapi_spec::SpecError),

    #[error("{var} not found in environment variables")]
    MissingToken { var: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Invalid header value for {name}")]
    InvalidHeader { name: &'static str },

    #[error("Failed to build MCP server from spec: {0}")]
    Bridge(String),

    #[error("MCP server terminated with error: {0}")]
    Serve(String),
}
