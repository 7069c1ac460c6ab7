//! SACE import builder CLI.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use sace_cli::logging::init_logging;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_import_command, run_tables};
use crate::summary::print_summary;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    match init_logging(&cli.log_config())
        .context("failed to initialize logging")
        .and_then(|()| dispatch(&cli.command))
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: &Command) -> Result<()> {
    match command {
        Command::Import(args) => {
            let result = run_import_command(args)?;
            print_summary(&result);
            Ok(())
        }
        Command::Tables => run_tables(),
    }
}
