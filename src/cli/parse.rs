//! CLI parse: clap types for branch-overlay. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Merge configure-branches overrides into a build.spec.local overlay
#[derive(Parser)]
#[command(name = "branch-overlay")]
#[command(about = "Merge configure-branches overrides into a validated build.spec.local overlay")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory; relative paths resolve against it
    #[arg(long, default_value = ".", global = true)]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Merge configure-branches over build.spec and emit the overlay
    Convert {
        /// Base build spec (default: paths.build_spec)
        #[arg(long)]
        build_spec: Option<PathBuf>,

        /// configure-branches file (default: paths.configure_branches)
        #[arg(long)]
        branches: Option<PathBuf>,

        /// Write the overlay to this file instead of stdout
        #[arg(long, short = 'o', conflicts_with = "write")]
        output: Option<PathBuf>,

        /// Write the overlay to the configured path (default: build.spec.local)
        #[arg(long)]
        write: bool,
    },
    /// Print the unique branch names of build.spec layered with build.spec.local
    UniqueBranches {
        /// Base build spec (default: paths.build_spec)
        #[arg(long)]
        build_spec: Option<PathBuf>,

        /// Local overlay (default: paths.overlay)
        #[arg(long)]
        local: Option<PathBuf>,
    },
    /// Show the components that must always share a branch
    Groups {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
