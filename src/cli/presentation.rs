//! CLI presentation: text and JSON formatting of command results.

use crate::error::OverlayError;
use crate::overlay::EqualityGroup;
use crate::writer::to_pretty_json;

pub fn format_groups_text(groups: &[EqualityGroup]) -> String {
    let width = groups.iter().map(|g| g.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!(
            "{:width$}  {}\n",
            group.name,
            group.members.join(", "),
            width = width
        ));
    }
    out
}

pub fn format_groups_json(groups: &[EqualityGroup]) -> Result<String, OverlayError> {
    to_pretty_json(groups)
}

/// Branch string followed by a newline, or nothing when there are no branches.
pub fn format_unique_branches(branches: &str) -> String {
    if branches.is_empty() {
        String::new()
    } else {
        format!("{}\n", branches)
    }
}
