//! Branch overlay merge.
//!
//! Turns the text of a configure-branches file into an [`OverlayDocument`],
//! validating every entry against a [`BaseSpecDigest`]. The merge is pure: it
//! performs no I/O, emits no logs and keeps no state between calls.
//!
//! Rules applied per entry:
//! - zone and file components may be assigned at most once;
//! - assigning a file component propagates the branch to the other members of
//!   its equality groups, and conflicting assignments inside a group abort;
//! - other known top-level keys are plain values, last write wins;
//! - anything else is an unknown key.

mod digest;
mod document;
mod groups;
mod parse;

pub use digest::{BaseSpecDigest, Classification, FILES_SECTION, ZONES_SECTION};
pub use document::{BranchRef, OverlayDocument};
pub use groups::{find_group, groups_containing, EqualityGroup, EQUALITY_GROUPS};
pub use parse::{parse_line, parse_lines, OverrideLine};

use crate::error::MergeError;
use std::collections::BTreeMap;

/// Merge `text` against `digest`. Shorthand for [`BranchOverlayMerger::merge`].
pub fn merge(digest: &BaseSpecDigest, text: &str) -> Result<OverlayDocument, MergeError> {
    BranchOverlayMerger::new(digest).merge(text)
}

/// Validates configure-branches text against a base spec digest.
#[derive(Debug, Clone, Copy)]
pub struct BranchOverlayMerger<'a> {
    digest: &'a BaseSpecDigest,
}

impl<'a> BranchOverlayMerger<'a> {
    pub fn new(digest: &'a BaseSpecDigest) -> Self {
        Self { digest }
    }

    /// Parse and apply every entry of `text`, stopping at the first error.
    pub fn merge(&self, text: &str) -> Result<OverlayDocument, MergeError> {
        let mut state = MergeState::new(self.digest);
        for entry in parse_lines(text) {
            state.apply(&entry?)?;
        }
        Ok(state.finish())
    }
}

/// How a component came to hold its branch.
#[derive(Debug, Clone, Copy)]
enum Source {
    Line(usize),
    Group(&'static str),
}

#[derive(Debug, Clone)]
struct Assignment {
    branch: String,
    source: Source,
}

/// Zones are only ever assigned directly by a line.
#[derive(Debug, Clone)]
struct ZoneAssignment {
    branch: String,
    line: usize,
}

struct MergeState<'a> {
    digest: &'a BaseSpecDigest,
    zones: BTreeMap<String, ZoneAssignment>,
    files: BTreeMap<String, Assignment>,
    settings: BTreeMap<String, String>,
}

impl<'a> MergeState<'a> {
    fn new(digest: &'a BaseSpecDigest) -> Self {
        Self {
            digest,
            zones: BTreeMap::new(),
            files: BTreeMap::new(),
            settings: BTreeMap::new(),
        }
    }

    fn apply(&mut self, entry: &OverrideLine<'_>) -> Result<(), MergeError> {
        match self.digest.classify(entry.key) {
            Classification::Zone => self.apply_zone(entry),
            Classification::File => self.apply_file(entry),
            Classification::TopLevel => {
                self.settings
                    .insert(entry.key.to_string(), entry.value.to_string());
                Ok(())
            }
            Classification::Unknown => Err(MergeError::UnknownKey {
                line: entry.line,
                key: entry.key.to_string(),
                text: entry.raw.to_string(),
            }),
        }
    }

    fn apply_zone(&mut self, entry: &OverrideLine<'_>) -> Result<(), MergeError> {
        if let Some(existing) = self.zones.get(entry.key) {
            return Err(duplicate(entry, existing.line));
        }
        self.zones.insert(
            entry.key.to_string(),
            ZoneAssignment {
                branch: entry.value.to_string(),
                line: entry.line,
            },
        );
        Ok(())
    }

    fn apply_file(&mut self, entry: &OverrideLine<'_>) -> Result<(), MergeError> {
        if let Some(existing) = self.files.get(entry.key) {
            match existing.source {
                Source::Line(first) => return Err(duplicate(entry, first)),
                Source::Group(group) if existing.branch != entry.value => {
                    return Err(mismatch(entry, group, entry.key, &existing.branch));
                }
                Source::Group(_) => {}
            }
        }

        // Validate the whole propagation before touching any state.
        for group in groups_containing(entry.key) {
            for peer in self.peers(group, entry.key) {
                if let Some(existing) = self.files.get(peer) {
                    if existing.branch != entry.value {
                        return Err(mismatch(entry, group.name, peer, &existing.branch));
                    }
                }
            }
        }

        self.files.insert(
            entry.key.to_string(),
            Assignment {
                branch: entry.value.to_string(),
                source: Source::Line(entry.line),
            },
        );

        for group in groups_containing(entry.key) {
            for peer in self.peers(group, entry.key) {
                if !self.files.contains_key(peer) {
                    self.files.insert(
                        peer.to_string(),
                        Assignment {
                            branch: entry.value.to_string(),
                            source: Source::Group(group.name),
                        },
                    );
                }
            }
        }

        Ok(())
    }

    /// Group members other than `key` that the base spec actually defines.
    fn peers(&self, group: &'static EqualityGroup, key: &str) -> Vec<&'static str> {
        group
            .peers(key)
            .filter(|peer| self.digest.is_known_file(peer))
            .collect()
    }

    fn finish(self) -> OverlayDocument {
        OverlayDocument {
            zones: self
                .zones
                .into_iter()
                .map(|(name, a)| (name, BranchRef::new(a.branch)))
                .collect(),
            files: self
                .files
                .into_iter()
                .map(|(name, a)| (name, BranchRef::new(a.branch)))
                .collect(),
            settings: self.settings,
        }
    }
}

fn duplicate(entry: &OverrideLine<'_>, first_line: usize) -> MergeError {
    MergeError::DuplicateKey {
        line: entry.line,
        key: entry.key.to_string(),
        first_line,
        text: entry.raw.to_string(),
    }
}

fn mismatch(entry: &OverrideLine<'_>, group: &str, member: &str, existing: &str) -> MergeError {
    MergeError::BranchMismatch {
        line: entry.line,
        text: entry.raw.to_string(),
        group: group.to_string(),
        member: member.to_string(),
        existing: existing.to_string(),
        requested: entry.value.to_string(),
    }
}
