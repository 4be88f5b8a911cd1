//! Event logging for the clean command.

use crate::cleanup::{CleanupCandidates, DeletionOutcome, DeletionStep};
use crate::context::RepoContext;
use crate::error::Result;
use crate::events::{Event, EventAction, append_event};
use serde_json::json;

/// Append one `branch_delete` event per deleted branch, a `prune` event when
/// pruning ran, and a `clean` summary event.
///
/// `target_oid` is recorded so a deleted branch can be recreated with
/// `git branch <name> <oid>`.
pub fn log_clean_events(
    ctx: &RepoContext,
    steps: &[DeletionStep],
    candidates: &CleanupCandidates,
    outcome: &DeletionOutcome,
    remote: Option<&str>,
) -> Result<()> {
    for name in &outcome.deleted {
        let force = steps
            .iter()
            .find(|step| &step.name == name)
            .is_some_and(|step| step.force);
        let target_oid = candidates
            .find(name)
            .map(|c| c.branch.target_oid.clone())
            .unwrap_or_default();

        let event = Event::new(EventAction::BranchDelete)
            .with_branch(name.clone())
            .with_details(json!({
                "force": force,
                "target_oid": target_oid,
            }));
        append_event(ctx, &event)?;
    }

    if let Some(pruned) = &outcome.pruned {
        let event = Event::new(EventAction::Prune).with_details(json!({
            "remote": remote,
            "refs": pruned,
        }));
        append_event(ctx, &event)?;
    }

    let event = Event::new(EventAction::Clean).with_details(json!({
        "planned": steps.len(),
        "deleted": outcome.deleted.len(),
        "failed": outcome.failed.as_ref().map(|f| f.name.clone()),
        "pruned": outcome.pruned.as_ref().map(Vec::len),
        "prune_error": outcome.prune_error,
    }));
    append_event(ctx, &event)?;

    Ok(())
}
