//! Logging System
//!
//! Structured logging using the `tracing` crate. Standard output carries the
//! program's results (overlay JSON, branch strings), so diagnostics go to
//! standard error or to a log file.

use crate::error::OverlayError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a full filter directive, e.g. `branch_overlay=debug`.
pub const LOG_ENV: &str = "BRANCH_OVERLAY_LOG";
/// Environment variable overriding the log format.
pub const LOG_FORMAT_ENV: &str = "BRANCH_OVERLAY_LOG_FORMAT";
/// Environment variable overriding the log output.
pub const LOG_OUTPUT_ENV: &str = "BRANCH_OVERLAY_LOG_OUTPUT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Master switch; `--quiet` turns it off
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (required when output is "file" unless the default applies)
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Colored output (text format on stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogOutput {
    Stderr,
    File,
}

/// Default log file: `<state dir>/branch-overlay.log`, falling back to the
/// working directory when no platform state directory is available.
pub fn default_log_file() -> PathBuf {
    directories::ProjectDirs::from("", "", "branch-overlay")
        .map(|dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.data_local_dir())
                .join("branch-overlay.log")
        })
        .unwrap_or_else(|| PathBuf::from("branch-overlay.log"))
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (BRANCH_OVERLAY_LOG, BRANCH_OVERLAY_LOG_FORMAT, ...)
/// 2. The supplied config (already carrying CLI flag overrides)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), OverlayError> {
    let default_config = LoggingConfig::default();
    let config = config.unwrap_or(&default_config);
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;

    let writer = match output {
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::File => {
            let path = config.file.clone().unwrap_or_else(default_log_file);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    OverlayError::ConfigError(format!("Failed to create log directory: {}", e))
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    OverlayError::ConfigError(format!("Failed to open log file {:?}: {}", path, e))
                })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
    };

    let registry = Registry::default().with(filter);
    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color && output == LogOutput::Stderr)
                    .with_writer(writer),
            )
            .try_init(),
    };

    result.map_err(|e| OverlayError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, OverlayError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::try_new(&config.level).map_err(|e| {
        OverlayError::ConfigError(format!("Invalid log level '{}': {}", config.level, e))
    })?;

    for (module, module_level) in &config.modules {
        let directive = format!("{}={}", module, module_level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| OverlayError::ConfigError(format!("Invalid log directive: {}", e)))?,
        );
    }

    Ok(filter)
}

fn determine_format(config: &LoggingConfig) -> Result<LogFormat, OverlayError> {
    let format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| config.format.clone());
    parse_format(&format)
}

fn parse_format(format: &str) -> Result<LogFormat, OverlayError> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(OverlayError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

fn determine_output(config: &LoggingConfig) -> Result<LogOutput, OverlayError> {
    let output = std::env::var(LOG_OUTPUT_ENV).unwrap_or_else(|_| config.output.clone());
    parse_output(&output)
}

fn parse_output(output: &str) -> Result<LogOutput, OverlayError> {
    match output {
        "stderr" => Ok(LogOutput::Stderr),
        "file" => Ok(LogOutput::File),
        other => Err(OverlayError::ConfigError(format!(
            "Invalid log output: {} (must be 'stderr' or 'file')",
            other
        ))),
    }
}
