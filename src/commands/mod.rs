//! Command implementations for branchsweep.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod clean;
mod inputs;
mod list;

use crate::cli::Command;
use crate::config::Config;
use crate::context::RepoContext;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::List(args) => list::cmd_list(args),
        Command::Clean(args) => clean::cmd_clean(args),
        Command::Config => cmd_config(),
    }
}

fn cmd_config() -> Result<()> {
    let ctx = RepoContext::resolve()?;
    let config = Config::load_or_default(ctx.config_path())?;

    print!("{}", config.to_yaml()?);
    Ok(())
}
