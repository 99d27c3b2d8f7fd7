//! Branch Overlay CLI Binary
//!
//! Command-line interface for merging configure-branches into build.spec.local.

use branch_overlay::cli::{command_name, map_error, Cli, RunContext};
use branch_overlay::config::{ConfigLoader, PathsConfig};
use branch_overlay::logging::{init_logging, LoggingConfig};
use clap::Parser;
use std::process;
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let command = command_name(&cli.command);
    debug!(command, workspace = %cli.workspace.display(), "branch-overlay starting");

    let context = match RunContext::new(cli.workspace.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            debug!(command, "Error loading configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(e.exit_code());
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            debug!(command, "Command completed successfully");
            print!("{}", output);
        }
        Err(e) => {
            debug!(command, "Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(e.exit_code());
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let loaded = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(&PathsConfig::resolve(&cli.workspace, path)),
        None => ConfigLoader::load(&cli.workspace),
    };
    let mut config = loaded.map(|c| c.logging).unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
