//! Bearer-authenticated client settings for the Hyperfabric API
//!
//! The bridge library builds and owns the actual HTTP client; this is the
//! origin and header set it is built from, validated up front.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::error::{BootstrapError, BootstrapResult};
use crate::secret::ApiToken;

/// One origin plus the auth and JSON headers sent on every request
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    default_headers: HeaderMap,
}

impl ApiClient {
    /// Create client settings for `base_url` that send `token` on every request
    pub fn new(base_url: Url, token: &ApiToken) -> BootstrapResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
            .map_err(|_| BootstrapError::InvalidHeader { name: "Authorization" })?;
        auth.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, auth);
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Self {
            base_url,
            default_headers,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Headers attached to every request
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }
}
