//! The overlay emitted as build.spec.local.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Branch selection for a single component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRef {
    pub branch: String,
}

impl BranchRef {
    pub fn new(branch: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
        }
    }
}

/// Overrides to layer over build.spec.
///
/// `zones` and `files` are omitted from the serialized form when empty. Other
/// top-level keys are flattened into the root object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayDocument {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub zones: BTreeMap<String, BranchRef>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub files: BTreeMap<String, BranchRef>,

    #[serde(flatten)]
    pub settings: BTreeMap<String, String>,
}

impl OverlayDocument {
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty() && self.files.is_empty() && self.settings.is_empty()
    }

    pub fn zone_branch(&self, name: &str) -> Option<&str> {
        self.zones.get(name).map(|b| b.branch.as_str())
    }

    pub fn file_branch(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(|b| b.branch.as_str())
    }

    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }
}
