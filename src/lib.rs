//! Branch Overlay: configure-branches merging for build specs
//!
//! Reads a `configure-branches` file of `<component>:<branch>` lines, validates
//! it against the zones, files and settings a `build.spec` defines, and
//! produces the `build.spec.local` overlay that pins components to branches.

pub mod buildspec;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod overlay;
pub mod writer;

pub use error::{MergeError, OverlayError, EXIT_FAILURE};
pub use overlay::{merge, BaseSpecDigest, BranchOverlayMerger, OverlayDocument};
