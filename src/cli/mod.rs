//! CLI argument parsing for branchsweep.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::cleanup::Category;
use clap::{Parser, Subcommand};

/// Branchsweep: find and safely delete merged, stale, and gone local branches.
///
/// Candidates are grouped into categories:
/// - merged: no commits missing from the current branch
/// - stale: last commit older than the stale threshold
/// - gone: upstream branch deleted on the remote
#[derive(Parser, Debug)]
#[command(name = "branchsweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for branchsweep.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List cleanup candidates.
    ///
    /// Shows each category with risk levels, reasons, and protection.
    /// Branches marked `*` are selected by default by `clean`.
    List(ListArgs),

    /// Delete selected branches.
    ///
    /// Dry-run by default; pass `--yes` to delete. Protected branches are
    /// never deleted.
    Clean(CleanArgs),

    /// Print the effective configuration as YAML.
    Config,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only show one category.
    #[arg(long, value_enum)]
    pub category: Option<Category>,

    /// Override `stale_branch_days` from config (0 or less disables).
    #[arg(long, allow_negative_numbers = true)]
    pub stale_days: Option<i64>,

    /// Print candidates as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Category used by `--all` and to narrow the default selection.
    #[arg(long, value_enum)]
    pub category: Option<Category>,

    /// Select a branch by name (repeatable). Protected branches are rejected.
    #[arg(long = "branch", value_name = "NAME", conflicts_with = "all")]
    pub branches: Vec<String>,

    /// Select every non-protected candidate in the category (default: merged).
    #[arg(long)]
    pub all: bool,

    /// Override `stale_branch_days` from config (0 or less disables).
    #[arg(long, allow_negative_numbers = true)]
    pub stale_days: Option<i64>,

    /// Prune remote-tracking refs after deleting.
    #[arg(long, conflicts_with = "no_prune")]
    pub prune: bool,

    /// Do not prune, even if enabled in config.
    #[arg(long)]
    pub no_prune: bool,

    /// Remote to prune (default: config `remote`, else all remotes).
    #[arg(long)]
    pub remote: Option<String>,

    /// Actually perform deletions (default is dry-run).
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl CleanArgs {
    /// Whether to prune, with flags taking precedence over `configured`.
    pub fn prune_enabled(&self, configured: bool) -> bool {
        if self.prune {
            true
        } else if self.no_prune {
            false
        } else {
            configured
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
