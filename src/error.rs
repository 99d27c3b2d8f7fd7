//! Error types for the branch overlay tool.

use std::path::PathBuf;
use thiserror::Error;

/// Exit status used for every failed invocation.
pub const EXIT_FAILURE: i32 = 3;

/// Failures raised while merging a configure-branches file.
///
/// Every variant carries the 1-indexed line on which the problem first
/// became observable together with that line's raw text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("line {line}: expected `<component>:<branch>`, got `{text}`")]
    MalformedLine { line: usize, text: String },

    #[error("line {line}: duplicate entry for `{key}` (already set on line {first_line}): `{text}`")]
    DuplicateKey {
        line: usize,
        key: String,
        first_line: usize,
        text: String,
    },

    #[error(
        "line {line}: branch mismatch in group `{group}`: `{member}` is on `{existing}` \
         but `{text}` requests `{requested}`"
    )]
    BranchMismatch {
        line: usize,
        text: String,
        group: String,
        member: String,
        existing: String,
        requested: String,
    },

    #[error("line {line}: unknown key in configure-branches file: `{key}`")]
    UnknownKey {
        line: usize,
        key: String,
        text: String,
    },
}

impl MergeError {
    /// 1-indexed source line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            MergeError::MalformedLine { line, .. }
            | MergeError::DuplicateKey { line, .. }
            | MergeError::BranchMismatch { line, .. }
            | MergeError::UnknownKey { line, .. } => *line,
        }
    }

    /// Raw text of the offending line.
    pub fn text(&self) -> &str {
        match self {
            MergeError::MalformedLine { text, .. }
            | MergeError::DuplicateKey { text, .. }
            | MergeError::BranchMismatch { text, .. }
            | MergeError::UnknownKey { text, .. } => text,
        }
    }
}

/// Errors surfaced by the I/O layers and the CLI.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("Invalid configure-branches file: {0}")]
    Merge(#[from] MergeError),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid build spec {path:?}: {reason}")]
    InvalidBuildSpec { path: PathBuf, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl OverlayError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OverlayError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

impl From<config::ConfigError> for OverlayError {
    fn from(err: config::ConfigError) -> Self {
        OverlayError::ConfigError(err.to_string())
    }
}
