//! Branchsweep: find and safely delete merged, stale, and gone local branches.
//!
//! This is the main entry point for the `branchsweep` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cleanup;
mod cli;
mod commands;
mod config;
mod context;
mod error;
mod events;
mod exit_codes;
mod git;
mod git_branches;
mod locks;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
