//! Unique branch names of a layered build spec.
//!
//! The result is used as a path segment for build artifacts: every distinct
//! branch named by `bits-branch` or by a zone or file component, sorted and
//! joined with `-`.

use super::BuildSpec;
use crate::overlay::{FILES_SECTION, ZONES_SECTION};
use std::collections::BTreeSet;

/// Top-level key naming the branch of the build tooling itself.
pub const BITS_BRANCH_KEY: &str = "bits-branch";

/// Sorted, de-duplicated branch names in use by `spec`.
pub fn collect_branches(spec: &BuildSpec) -> BTreeSet<String> {
    let mut branches = BTreeSet::new();

    if let Some(branch) = spec.get(BITS_BRANCH_KEY).and_then(|v| v.as_str()) {
        branches.insert(branch.to_string());
    }

    for section in [ZONES_SECTION, FILES_SECTION] {
        for name in spec.section_names(section) {
            let path = format!("{}|{}|branch", section, name);
            if let Some(branch) = spec.get(&path).and_then(|v| v.as_str()) {
                branches.insert(branch.to_string());
            }
        }
    }

    branches
}

/// Hyphen-joined branch names; empty when no component names a branch.
pub fn unique_branches(spec: &BuildSpec) -> String {
    collect_branches(spec)
        .into_iter()
        .collect::<Vec<_>>()
        .join("-")
}
