//! Summary of the base build spec used to validate overrides.

use std::collections::BTreeSet;

/// Section holding zone components.
pub const ZONES_SECTION: &str = "zones";
/// Section holding file components.
pub const FILES_SECTION: &str = "files";

/// Known component and key names of a base build spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseSpecDigest {
    known_zone_names: BTreeSet<String>,
    known_file_names: BTreeSet<String>,
    known_top_level_keys: BTreeSet<String>,
}

/// Where an override key belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Zone,
    File,
    TopLevel,
    Unknown,
}

impl BaseSpecDigest {
    /// Build a digest from the three name sets.
    ///
    /// The section names `zones` and `files` are dropped from the top-level
    /// set; they are never assignable as plain values.
    pub fn new<Z, F, T>(zones: Z, files: F, top_level: T) -> Self
    where
        Z: IntoIterator,
        Z::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        let known_top_level_keys = top_level
            .into_iter()
            .map(Into::into)
            .filter(|k: &String| k != ZONES_SECTION && k != FILES_SECTION)
            .collect();

        Self {
            known_zone_names: zones.into_iter().map(Into::into).collect(),
            known_file_names: files.into_iter().map(Into::into).collect(),
            known_top_level_keys,
        }
    }

    pub fn known_zone_names(&self) -> &BTreeSet<String> {
        &self.known_zone_names
    }

    pub fn known_file_names(&self) -> &BTreeSet<String> {
        &self.known_file_names
    }

    pub fn known_top_level_keys(&self) -> &BTreeSet<String> {
        &self.known_top_level_keys
    }

    pub fn is_known_file(&self, name: &str) -> bool {
        self.known_file_names.contains(name)
    }

    /// Decide which category `key` falls into. Zones win over files, files
    /// over top-level keys.
    pub fn classify(&self, key: &str) -> Classification {
        if self.known_zone_names.contains(key) {
            Classification::Zone
        } else if self.known_file_names.contains(key) {
            Classification::File
        } else if self.known_top_level_keys.contains(key) {
            Classification::TopLevel
        } else {
            Classification::Unknown
        }
    }
}
