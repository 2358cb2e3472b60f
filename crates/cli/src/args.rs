//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "minuet-cli")]
#[command(about = "Minuet CLI - Inspect the simulator configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  minuet-cli show\n  minuet-cli show --legacy --output json\n  minuet-cli check --strict\n  minuet-cli region 0x20000010\n  minuet-cli --config-path ./config.json init\n"
)]
pub struct Cli {
    /// Path to the configuration file (overrides the file beside the executable).
    ///
    /// Can also be set via MINUET_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "MINUET_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format (table, json, yaml)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the resolved configuration
    Show {
        /// Show the legacy alias names instead of the full snapshot
        #[arg(long)]
        legacy: bool,
    },

    /// Load the configuration file and report any warnings
    Check {
        /// Exit with a validation error when any warning is reported
        #[arg(long)]
        strict: bool,
    },

    /// Print the resolved configuration file path
    Path,

    /// Resolve an address to the tensor region that contains it
    Region {
        /// Address as 0x-prefixed hex or decimal
        address: String,
    },

    /// Write the default configuration to the resolved path
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
