//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::buildspec::{unique_branches, BuildSpec};
use crate::cli::parse::Commands;
use crate::cli::presentation::{format_groups_json, format_groups_text, format_unique_branches};
use crate::config::{ConfigLoader, PathsConfig, ToolConfig};
use crate::error::OverlayError;
use crate::overlay::{self, EQUALITY_GROUPS};
use crate::writer::{to_pretty_json, write_json_to_file};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace root and resolved configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: ToolConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, OverlayError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(&PathsConfig::resolve(&workspace_root, path))?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    /// Create run context from an already loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: ToolConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Run `command`, returning what should be printed on stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, OverlayError> {
        match command {
            Commands::Convert {
                build_spec,
                branches,
                output,
                write,
            } => self.convert(
                build_spec.as_deref(),
                branches.as_deref(),
                output.as_deref(),
                *write,
            ),
            Commands::UniqueBranches { build_spec, local } => {
                self.unique_branches(build_spec.as_deref(), local.as_deref())
            }
            Commands::Groups { format } => match format.as_str() {
                "json" => format_groups_json(EQUALITY_GROUPS),
                "text" => Ok(format_groups_text(EQUALITY_GROUPS)),
                other => Err(OverlayError::ConfigError(format!(
                    "Invalid format: {} (must be 'text' or 'json')",
                    other
                ))),
            },
        }
    }

    fn convert(
        &self,
        build_spec: Option<&Path>,
        branches: Option<&Path>,
        output: Option<&Path>,
        write: bool,
    ) -> Result<String, OverlayError> {
        let spec_path = self.resolve(build_spec, &self.config.paths.build_spec);
        let branches_path = self.resolve(branches, &self.config.paths.configure_branches);

        let spec = BuildSpec::load(&spec_path)?;
        let text = fs::read_to_string(&branches_path)
            .map_err(|e| OverlayError::io(&branches_path, e))?;
        debug!(path = %branches_path.display(), bytes = text.len(), "Read configure-branches");

        let document = overlay::merge(&spec.digest(), &text)?;
        info!(
            zones = document.zones.len(),
            files = document.files.len(),
            settings = document.settings.len(),
            "Merged configure-branches"
        );

        let target = match (output, write) {
            (Some(path), _) => Some(PathsConfig::resolve(&self.workspace_root, path)),
            (None, true) => Some(self.resolve(None, &self.config.paths.overlay)),
            (None, false) => None,
        };

        match target {
            Some(path) => {
                write_json_to_file(&path, &document)?;
                info!(path = %path.display(), "Wrote overlay");
                Ok(String::new())
            }
            None => to_pretty_json(&document),
        }
    }

    fn unique_branches(
        &self,
        build_spec: Option<&Path>,
        local: Option<&Path>,
    ) -> Result<String, OverlayError> {
        let spec_path = self.resolve(build_spec, &self.config.paths.build_spec);
        let local_path = self.resolve(local, &self.config.paths.overlay);
        let spec = BuildSpec::load_layered(&spec_path, &local_path)?;
        Ok(format_unique_branches(&unique_branches(&spec)))
    }

    fn resolve(&self, explicit: Option<&Path>, configured: &Path) -> PathBuf {
        PathsConfig::resolve(&self.workspace_root, explicit.unwrap_or(configured))
    }
}
