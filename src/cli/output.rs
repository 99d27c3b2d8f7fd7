//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{MergeError, OverlayError};
use crate::overlay::find_group;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &OverlayError) -> String {
    match e {
        OverlayError::Merge(MergeError::BranchMismatch { group, .. }) => match find_group(group) {
            Some(g) => format!(
                "{}\nhint: {} must always use the same branch",
                e,
                g.members.join(", ")
            ),
            None => e.to_string(),
        },
        _ => e.to_string(),
    }
}
