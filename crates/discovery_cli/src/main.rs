//! Command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, configure logging, and build catalogs from a data dir.
//! - Map any failure to a non-zero exit code with a one-line message.

use std::io::{self, Write};
use std::process::ExitCode;

use discovery_core::{default_log_level, init_logging, DiscoveryCatalogs, SourceConfig};

mod cli;
mod commands;

use commands::{CliError, CliResult};

fn run(cli: cli::Cli) -> CliResult<()> {
    let global = cli.global;
    if let Some(log_dir) = &global.log_dir {
        let level = global
            .log_level
            .unwrap_or_else(|| default_log_level().as_str().to_string());
        init_logging(&level, log_dir)?;
    }

    let config = SourceConfig::new(global.data_dir);
    let catalogs = DiscoveryCatalogs::from_config(&config)?;
    commands::dispatch(cli.command, &catalogs)
}

fn main() -> ExitCode {
    match run(cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn print_error(err: &CliError) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "discovery: {err}");
}
