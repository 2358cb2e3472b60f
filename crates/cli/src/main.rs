//! Minuet CLI - inspect and manage the simulator configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the configuration snapshot through the shared config library.
//! - Format and display results in various output formats (table, JSON, YAML).
//!
//! Does NOT handle:
//! - Loading or merging logic (see `crates/config`).
//! - Running the compute pipeline that consumes the configuration.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout stays machine-readable; `RUST_LOG` unset means `warn`.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use minuet_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run_command(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    }
}
