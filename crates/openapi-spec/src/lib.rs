//! # openapi-spec
//!
//! OpenAPI 3.x JSON document handling for the Hyperfabric MCP bridge.
//! Loads and saves specs as opaque JSON trees and rewrites the `paths`
//! mapping under a fixed prefix.

mod document;
mod error;
mod prefix;

pub use document::{SpecDocument, SpecInfo};
pub use error::{SpecError, SpecResult};
pub use prefix::{prefixed_path, PathRename, PrefixJob, PrefixOutcome, PrefixReport};

/// Prefix the Hyperfabric gateway expects in front of every route
pub const DEFAULT_PATH_PREFIX: &str = "/api/v1/";
