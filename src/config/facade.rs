//! Config loading facade: assembles sources in precedence order and validates.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::ToolConfig;
use crate::error::OverlayError;
use config::File;
use std::path::{Path, PathBuf};

/// Loads [`ToolConfig`] from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, user file, workspace file and environment.
    pub fn load(workspace_root: &Path) -> Result<ToolConfig, OverlayError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config: ToolConfig = builder
            .add_source(merge_policy::environment())
            .build()?
            .try_deserialize()?;
        Self::validated(config)
    }

    /// Load defaults, one explicit file and environment. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<ToolConfig, OverlayError> {
        let config: ToolConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true))
            .add_source(merge_policy::environment())
            .build()?
            .try_deserialize()?;
        Self::validated(config)
    }

    /// Path of the user-level config file, if one can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn validated(config: ToolConfig) -> Result<ToolConfig, OverlayError> {
        config.validate().map_err(OverlayError::ConfigError)?;
        Ok(config)
    }
}
