//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

pub const DEFAULT_BUILD_SPEC: &str = "build.spec";
pub const DEFAULT_CONFIGURE_BRANCHES: &str = "configure-branches";
pub const DEFAULT_OVERLAY: &str = "build.spec.local";

/// Prefix of environment variables read as configuration.
pub const ENV_PREFIX: &str = "BRANCH_OVERLAY";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("paths.build_spec", DEFAULT_BUILD_SPEC)?
        .set_default("paths.configure_branches", DEFAULT_CONFIGURE_BRANCHES)?
        .set_default("paths.overlay", DEFAULT_OVERLAY)
}

/// Environment source, e.g. `BRANCH_OVERLAY_PATHS__BUILD_SPEC`. Applied last.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}
