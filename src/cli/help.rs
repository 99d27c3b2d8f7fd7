//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name recorded on log events (e.g. "convert", "unique_branches").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Convert { .. } => "convert",
        Commands::UniqueBranches { .. } => "unique_branches",
        Commands::Groups { .. } => "groups",
    }
}
