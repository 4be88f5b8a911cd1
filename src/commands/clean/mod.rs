//! Implementation of the `branchsweep clean` command.
//!
//! Deletes selected cleanup candidates:
//! - `--branch NAME`: exactly the named candidates
//! - `--all`: every non-protected candidate of `--category` (default merged)
//! - otherwise: the default selection (safe merged and gone branches)
//!
//! # Safety
//!
//! - Default behavior is dry-run (prints the deletion plan)
//! - Requires `--yes` to actually delete
//! - Protected branches are never planned; naming one is an error
//! - Only non-safe candidates are force-deleted (`git branch -D`)
//!
//! # Logging
//!
//! Appends `branch_delete`, `prune`, and `clean` events after execution.
//! A logging failure is reported as a warning.

mod display;
mod logging;
mod selection;


use super::inputs::CleanupInputs;
use crate::cleanup::{execute, plan};
use crate::cli::CleanArgs;
use crate::context::RepoContext;
use crate::error::Result;
use crate::git_branches::{delete_branch, prune_remote_tracking};
use crate::locks::acquire_cleanup_lock;

use display::{print_deleted, print_deletion_plan, print_outcome};
use logging::log_clean_events;
use selection::build_selection;

/// Execute the `branchsweep clean` command.
///
/// # Behavior
///
/// - Without `--yes`: dry-run mode, prints what would be deleted
/// - With `--yes`: holds `cleanup.lock` for the whole run, prunes if enabled
/// - Exits non-zero if a deletion or the prune failed
pub fn cmd_clean(args: CleanArgs) -> Result<()> {
    let ctx = RepoContext::resolve()?;
    run_clean(&ctx, &args)
}

pub(crate) fn run_clean(ctx: &RepoContext, args: &CleanArgs) -> Result<()> {
    // Held from loading through logging, so the plan reflects the branches
    // that exist while deleting.
    let lock = if args.yes {
        Some(acquire_cleanup_lock(ctx, "clean")?)
    } else {
        None
    };

    let inputs = CleanupInputs::load(ctx)?;
    let candidates = inputs.candidates(args.stale_days);

    let selection = build_selection(&inputs, &candidates, args)?;
    if selection.is_empty() {
        println!("No branches selected for deletion.");
        return Ok(());
    }

    let steps = plan(&selection, &candidates);

    print_deletion_plan(&steps, &candidates);

    if !args.yes {
        println!();
        println!("Dry-run mode: no changes made.");
        println!("Run with --yes to delete these branches.");
        return Ok(());
    }

    let prune_enabled = args.prune_enabled(inputs.config.prune_remote_tracking);
    let remote = args.remote.clone().or_else(|| inputs.config.remote.clone());

    let outcome = execute(
        &steps,
        |name, force| {
            delete_branch(&ctx.repo_root, name, force)?;
            print_deleted(name, force);
            Ok(())
        },
        || prune_remote_tracking(&ctx.repo_root, remote.as_deref()),
        prune_enabled,
    );

    if let Err(e) = log_clean_events(ctx, &steps, &candidates, &outcome, remote.as_deref()) {
        eprintln!("Warning: failed to record events: {}", e);
    }

    if let Some(lock) = lock
        && let Err(e) = lock.release()
    {
        eprintln!("Warning: {}", e);
    }

    print_outcome(&outcome);

    outcome.into_result()
}
