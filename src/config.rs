//! Configuration System
//!
//! Layered tool configuration. Sources, lowest precedence first:
//! 1. merge-policy defaults
//! 2. user file (`$XDG_CONFIG_HOME/branch-overlay/config.toml`)
//! 3. workspace file (`<workspace>/.branch-overlay.toml`)
//! 4. `BRANCH_OVERLAY_*` environment variables (`__` separates nesting)
//!
//! CLI flags are applied on top by the binary.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use merge::merge_policy::{
    DEFAULT_BUILD_SPEC, DEFAULT_CONFIGURE_BRANCHES, DEFAULT_OVERLAY, ENV_PREFIX,
};
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Input and output file locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// File locations. Relative paths resolve against the workspace root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_build_spec")]
    pub build_spec: PathBuf,

    #[serde(default = "default_configure_branches")]
    pub configure_branches: PathBuf,

    #[serde(default = "default_overlay")]
    pub overlay: PathBuf,
}

fn default_build_spec() -> PathBuf {
    PathBuf::from(DEFAULT_BUILD_SPEC)
}

fn default_configure_branches() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIGURE_BRANCHES)
}

fn default_overlay() -> PathBuf {
    PathBuf::from(DEFAULT_OVERLAY)
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            build_spec: default_build_spec(),
            configure_branches: default_configure_branches(),
            overlay: default_overlay(),
        }
    }
}

impl PathsConfig {
    /// Resolve `path` against `workspace_root` unless it is already absolute.
    pub fn resolve(workspace_root: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            workspace_root.join(path)
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, path) in [
            ("build_spec", &self.build_spec),
            ("configure_branches", &self.configure_branches),
            ("overlay", &self.overlay),
        ] {
            if path.as_os_str().is_empty() {
                return Err(format!("paths.{} cannot be empty", name));
            }
        }
        Ok(())
    }
}

impl ToolConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), String> {
        self.paths.validate()?;
        if !["text", "json"].contains(&self.logging.format.as_str()) {
            return Err(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                self.logging.format
            ));
        }
        Ok(())
    }
}
