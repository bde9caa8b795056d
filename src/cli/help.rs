//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "plan", "generate").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Platforms { .. } => "platforms",
        Commands::Plan { .. } => "plan",
        Commands::Generate { .. } => "generate",
        Commands::Studio { .. } => "studio",
    }
}
