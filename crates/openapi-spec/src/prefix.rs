//! Rewrite every route in `paths` under a common prefix

use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::document::SpecDocument;
use crate::error::SpecResult;

/// Build the prefixed form of a route key.
///
/// At most one leading `/` is dropped from `key` so that a prefix ending
/// in `/` does not produce `//`. Applying this twice prefixes twice.
/// Only one slash goes, so `//x` keeps its inner slash: `/api/v1//x`.
pub fn prefixed_path(prefix: &str, key: &str) -> String {
    let trimmed = key.strip_prefix('/').unwrap_or(key);
    format!("{}{}", prefix, trimmed)
}

/// One route key before and after prefixing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRename {
    pub original: String,
    pub modified: String,
}

/// What `prefix_paths` did to a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixOutcome {
    /// `paths` was a mapping and every key was rewritten
    Rewritten(Vec<PathRename>),
    /// `paths` was missing or not a mapping; the document is unchanged
    NoPaths,
}

impl PrefixOutcome {
    /// Renames applied, empty when nothing was rewritten
    pub fn renames(&self) -> &[PathRename] {
        match self {
            Self::Rewritten(renames) => renames,
            Self::NoPaths => &[],
        }
    }
}

impl SpecDocument {
    /// Prefix every key of the `paths` mapping.
    ///
    /// Route definitions are moved over untouched and keep their order. If
    /// two keys collapse to the same prefixed key (`/a` and `a`) the later
    /// definition wins, at the position of the first.
    pub fn prefix_paths(&mut self, prefix: &str) -> PrefixOutcome {
        let Some(paths) = self
            .as_value_mut()
            .get_mut("paths")
            .and_then(Value::as_object_mut)
        else {
            return PrefixOutcome::NoPaths;
        };

        let original = std::mem::take(paths);
        let mut modified = Map::with_capacity(original.len());
        let mut renames = Vec::with_capacity(original.len());

        for (path, item) in original {
            let new_path = prefixed_path(prefix, &path);
            if modified.insert(new_path.clone(), item).is_some() {
                warn!("Prefixed path {} collides with an earlier route; later definition kept", new_path);
            }
            renames.push(PathRename {
                original: path,
                modified: new_path,
            });
        }

        *paths = modified;
        PrefixOutcome::Rewritten(renames)
    }
}

/// Summary of a completed prefix job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixReport {
    pub outcome: PrefixOutcome,
    pub written_to: PathBuf,
}

/// Load a spec file, prefix its paths and write the result
#[derive(Debug, Clone)]
pub struct PrefixJob {
    pub input: PathBuf,
    /// Destination; `None` overwrites `input`
    pub output: Option<PathBuf>,
    pub prefix: String,
}

impl PrefixJob {
    pub fn new(input: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: None,
            prefix: prefix.into(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// File the job writes to
    pub fn target(&self) -> &PathBuf {
        self.output.as_ref().unwrap_or(&self.input)
    }

    /// Run the job. Nothing is written unless the input loads cleanly.
    pub fn run(&self) -> SpecResult<PrefixReport> {
        let mut doc = SpecDocument::load(&self.input)?;

        let outcome = doc.prefix_paths(&self.prefix);
        match &outcome {
            PrefixOutcome::Rewritten(renames) => {
                info!("Modifying {} paths", renames.len());
                for rename in renames {
                    info!("  Original: {} -> Modified: {}", rename.original, rename.modified);
                }
            }
            PrefixOutcome::NoPaths => {
                warn!("No 'paths' mapping found in the OpenAPI specification. No modifications made.");
            }
        }

        let target = self.target().clone();
        doc.save(&target)?;
        info!("Successfully wrote modified spec to: {}", target.display());

        Ok(PrefixReport {
            outcome,
            written_to: target,
        })
    }
}
