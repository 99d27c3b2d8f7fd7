//! Build spec documents.
//!
//! `build.spec` is a JSON object whose `zones` and `files` members map
//! component names to their definitions. `build.spec.local`, when present, is
//! layered over it to select per-component branches.

mod branches;
mod layer;

pub use branches::{collect_branches, unique_branches, BITS_BRANCH_KEY};
pub use layer::deep_merge;

use crate::error::OverlayError;
use crate::overlay::{BaseSpecDigest, FILES_SECTION, ZONES_SECTION};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Separator for nested lookups, e.g. `zones|manatee|branch`.
pub const PATH_SEPARATOR: char = '|';

/// A parsed (and possibly layered) build spec.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSpec {
    root: Map<String, Value>,
}

impl BuildSpec {
    /// Wrap an already parsed document, checking its basic shape.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let Value::Object(root) = value else {
            return Err("document is not a JSON object".to_string());
        };
        for section in [ZONES_SECTION, FILES_SECTION] {
            match root.get(section) {
                Some(Value::Object(_)) => {}
                Some(_) => return Err(format!("`{}` is not an object", section)),
                None => return Err(format!("missing `{}` section", section)),
            }
        }
        Ok(Self { root })
    }

    /// Load build.spec from disk.
    pub fn load(path: &Path) -> Result<Self, OverlayError> {
        let value = read_json(path)?;
        let spec = Self::from_value(value).map_err(|reason| OverlayError::InvalidBuildSpec {
            path: path.to_path_buf(),
            reason,
        })?;
        debug!(
            path = %path.display(),
            zones = spec.section_names(ZONES_SECTION).count(),
            files = spec.section_names(FILES_SECTION).count(),
            "Loaded build spec"
        );
        Ok(spec)
    }

    /// Load build.spec with build.spec.local layered over it. A missing local
    /// file is not an error.
    pub fn load_layered(base: &Path, local: &Path) -> Result<Self, OverlayError> {
        let spec = Self::load(base)?;
        if !local.exists() {
            debug!(path = %local.display(), "No local build spec, using base only");
            return Ok(spec);
        }

        let local_value = read_json(local)?;
        if !local_value.is_object() {
            return Err(OverlayError::InvalidBuildSpec {
                path: local.to_path_buf(),
                reason: "document is not a JSON object".to_string(),
            });
        }

        let merged = deep_merge(Value::Object(spec.root), local_value);
        let spec = Self::from_value(merged).map_err(|reason| OverlayError::InvalidBuildSpec {
            path: local.to_path_buf(),
            reason,
        })?;
        debug!(path = %local.display(), "Layered local build spec");
        Ok(spec)
    }

    /// Look up a `|`-separated path. `None` if any segment is missing.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split(PATH_SEPARATOR);
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Component names defined under `section` (`zones` or `files`).
    pub fn section_names<'a>(&'a self, section: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.root
            .get(section)
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|m| m.keys().map(String::as_str))
    }

    /// Names the overlay merge validates against.
    pub fn digest(&self) -> BaseSpecDigest {
        BaseSpecDigest::new(
            self.section_names(ZONES_SECTION),
            self.section_names(FILES_SECTION),
            self.root.keys().map(String::as_str),
        )
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }
}

fn read_json(path: &Path) -> Result<Value, OverlayError> {
    let contents = fs::read_to_string(path).map_err(|e| OverlayError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| OverlayError::InvalidBuildSpec {
        path: path.to_path_buf(),
        reason: format!("malformed JSON: {}", e),
    })
}
