//! Deletion planning and execution.

use super::selection::Selection;
use super::types::{CleanupCandidates, RiskLevel};
use crate::error::{Result, SweepError};

/// One branch to delete and whether deletion must be forced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionStep {
    pub name: String,
    pub force: bool,
}

/// The deletion that stopped the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDeletion {
    pub name: String,
    pub message: String,
}

/// Aggregate result of executing a deletion plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionOutcome {
    /// Branches deleted, in plan order.
    pub deleted: Vec<String>,
    /// The deletion that failed, if any. Later steps were not attempted.
    pub failed: Option<FailedDeletion>,
    /// Remote-tracking refs pruned, when the prune step ran and succeeded.
    pub pruned: Option<Vec<String>>,
    /// Why the prune step failed, when it ran and failed.
    pub prune_error: Option<String>,
}

impl DeletionOutcome {
    /// One-line summary such as `2 deleted, 1 failed, 3 pruned`.
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} deleted", self.deleted.len())];
        if self.failed.is_some() {
            parts.push("1 failed".to_string());
        }
        if let Some(pruned) = &self.pruned {
            parts.push(format!("{} pruned", pruned.len()));
        }
        if self.prune_error.is_some() {
            parts.push("prune failed".to_string());
        }
        parts.join(", ")
    }

    /// Convert into an error for the first problem, deletion before prune.
    pub fn into_result(self) -> Result<()> {
        if let Some(failed) = self.failed {
            return Err(SweepError::DeletionFailure {
                name: failed.name,
                message: failed.message,
            });
        }
        if let Some(message) = self.prune_error {
            return Err(SweepError::PruneFailure(message));
        }
        Ok(())
    }
}

/// Build the deletion plan for `selection`.
///
/// Steps follow the selection's insertion order. Non-`safe` candidates are
/// force-deleted. Names without a candidate, and protected candidates, are skipped.
pub fn plan(selection: &Selection, all_candidates: &CleanupCandidates) -> Vec<DeletionStep> {
    selection
        .iter()
        .filter_map(|name| all_candidates.find(name))
        .filter(|candidate| !candidate.is_protected)
        .map(|candidate| DeletionStep {
            name: candidate.name().to_string(),
            force: candidate.risk != RiskLevel::Safe,
        })
        .collect()
}

/// Execute `plan` one step at a time.
///
/// Stops at the first failed deletion without rolling back earlier ones. When
/// `prune_enabled` and at least one branch was deleted, `prune_fn` runs exactly
/// once after the deletions; its failure is recorded separately and does not
/// affect `deleted`.
pub fn execute<D, P>(
    plan: &[DeletionStep],
    mut delete_fn: D,
    prune_fn: P,
    prune_enabled: bool,
) -> DeletionOutcome
where
    D: FnMut(&str, bool) -> Result<()>,
    P: FnOnce() -> Result<Vec<String>>,
{
    let mut outcome = DeletionOutcome::default();

    for step in plan {
        match delete_fn(&step.name, step.force) {
            Ok(()) => outcome.deleted.push(step.name.clone()),
            Err(e) => {
                let message = match e {
                    SweepError::DeletionFailure { message, .. } => message,
                    other => other.to_string(),
                };
                outcome.failed = Some(FailedDeletion {
                    name: step.name.clone(),
                    message,
                });
                break;
            }
        }
    }

    if prune_enabled && !outcome.deleted.is_empty() {
        match prune_fn() {
            Ok(pruned) => outcome.pruned = Some(pruned),
            Err(e) => outcome.prune_error = Some(e.to_string()),
        }
    }

    outcome
}
