//! CLI parse: clap types for adcraft. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// adcraft - multi-platform ad creative generation
#[derive(Parser)]
#[command(name = "adcraft")]
#[command(about = "Generate platform-sized ad creatives and promo videos from one campaign brief")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the platforms creatives can be generated for
    Platforms {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Validate a campaign and show the jobs a run would dispatch
    Plan {
        /// Campaign file (TOML)
        #[arg(long)]
        campaign: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Generate every creative for a campaign
    Generate {
        /// Campaign file (TOML)
        #[arg(long)]
        campaign: PathBuf,
        /// Output directory (defaults to generation.output_dir from config)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Edit a campaign interactively with undo/redo, then generate
    Studio {
        /// Campaign file (TOML)
        #[arg(long)]
        campaign: PathBuf,
    },
}
