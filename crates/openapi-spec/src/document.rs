//! OpenAPI document loading and saving
//!
//! The document is kept as an opaque JSON tree. Only `info` and `paths`
//! are ever looked at; everything else is carried through untouched.

use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{SpecError, SpecResult};

/// Title and version from the `info` object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecInfo {
    pub title: String,
    pub version: Option<String>,
}

/// An OpenAPI document held as raw JSON
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    root: Value,
    source: Option<PathBuf>,
}

impl SpecDocument {
    /// Wrap an already parsed JSON value
    pub fn from_value(root: Value) -> Self {
        Self { root, source: None }
    }

    /// Load a document from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SpecResult<Self> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SpecError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SpecError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let root: Value = serde_json::from_str(&contents).map_err(|source| SpecError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loaded spec from {:?}", path);
        Ok(Self {
            root,
            source: Some(path.to_path_buf()),
        })
    }

    /// Render the document as pretty JSON with 2-space indentation
    pub fn to_json_string(&self) -> SpecResult<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// Write the document to `path`, replacing any existing file
    pub fn save(&self, path: impl AsRef<Path>) -> SpecResult<()> {
        let path = path.as_ref();
        let contents = self.to_json_string()?;

        std::fs::write(path, contents).map_err(|source| SpecError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Saved spec to {:?}", path);
        Ok(())
    }

    /// File the document was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// `info.title` and `info.version`, when the document carries a title
    pub fn info(&self) -> Option<SpecInfo> {
        let info = self.root.get("info")?;
        let title = info.get("title")?.as_str()?.to_string();
        let version = info
            .get("version")
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(SpecInfo { title, version })
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    pub(crate) fn as_value_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }
}
