//! Built-in equality groups.
//!
//! Components in the same group are always built from the same branch: an
//! override for any member is propagated to all of them.

use serde::Serialize;

/// A named set of file components that must share one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EqualityGroup {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

/// The fixed group table.
pub const EQUALITY_GROUPS: &[EqualityGroup] = &[
    EqualityGroup {
        name: "platform",
        members: &["platform", "platboot"],
    },
    EqualityGroup {
        name: "agents",
        members: &["agents", "agents_md5"],
    },
];

impl EqualityGroup {
    pub fn contains(&self, component: &str) -> bool {
        self.members.contains(&component)
    }

    /// Members of this group other than `component`, in table order.
    pub fn peers<'a>(&'a self, component: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.members.iter().copied().filter(move |m| *m != component)
    }
}

/// Every group that lists `component` as a member.
pub fn groups_containing(component: &str) -> impl Iterator<Item = &'static EqualityGroup> + '_ {
    EQUALITY_GROUPS.iter().filter(move |g| g.contains(component))
}

/// Look a group up by name.
pub fn find_group(name: &str) -> Option<&'static EqualityGroup> {
    EQUALITY_GROUPS.iter().find(|g| g.name == name)
}
