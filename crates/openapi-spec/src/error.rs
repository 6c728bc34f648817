//! Error types for OpenAPI document handling

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for spec operations
pub type SpecResult<T> = std::result::Result<T, SpecError>;

/// Spec error types
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Specification file not found at '{}'", .path.display())]
    NotFound { path: PathBuf },

    #[error("Could not open or read file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not decode JSON from '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not encode spec as JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Could not write modified spec to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path() {
        let err = SpecError::NotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        assert_eq!(
            err.to_string(),
            "Specification file not found at '/tmp/missing.json'"
        );
    }

    #[test]
    fn test_decode_message_includes_cause() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SpecError::Decode {
            path: PathBuf::from("spec.json"),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("Could not decode JSON from 'spec.json': "));
        assert!(message.contains("EOF"));
    }
}
