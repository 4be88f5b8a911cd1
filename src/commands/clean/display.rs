//! Display and formatting utilities for clean command output.

use crate::cleanup::{CleanupCandidates, DeletionOutcome, DeletionStep};

/// Print the deletion plan in a readable format.
pub fn print_deletion_plan(steps: &[DeletionStep], candidates: &CleanupCandidates) {
    println!("Deletion plan ({} branch(es)):", steps.len());
    for step in steps {
        println!("  - {}", format_step(step, candidates));
    }
}

fn format_step(step: &DeletionStep, candidates: &CleanupCandidates) -> String {
    let mode = if step.force { "force" } else { "safe" };
    match candidates.find(&step.name) {
        Some(candidate) => format!(
            "{} [{}] {} ({})",
            step.name, mode, candidate.risk, candidate.risk_reason
        ),
        None => format!("{} [{}]", step.name, mode),
    }
}

pub fn print_deleted(name: &str, force: bool) {
    if force {
        println!("Deleted {} (forced)", name);
    } else {
        println!("Deleted {}", name);
    }
}

/// Print the execution summary, with failures on stderr.
pub fn print_outcome(outcome: &DeletionOutcome) {
    println!();
    println!("Cleanup complete: {}", outcome.summary());

    if let Some(pruned) = &outcome.pruned {
        for r in pruned {
            println!("  Pruned: {}", r);
        }
    }
    if let Some(failed) = &outcome.failed {
        eprintln!("  Failed: {}: {}", failed.name, failed.message);
    }
    if let Some(message) = &outcome.prune_error {
        eprintln!("  Prune failed: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_step_without_candidate() {
        let step = DeletionStep {
            name: "feature/x".to_string(),
            force: true,
        };
        assert_eq!(
            format_step(&step, &CleanupCandidates::default()),
            "feature/x [force]"
        );
    }
}
