//! Partitioning of branches into cleanup categories.

use super::protection::ProtectionRules;
use super::risk::{RiskAssessment, assess};
use super::types::{Branch, BranchRule, CleanupCandidate, CleanupCandidates, TrackingInfo};
use chrono::Utc;
use std::collections::{HashMap, HashSet};

const SECONDS_PER_DAY: i64 = 86_400;

/// Categorize branches into merged, stale, and gone candidates using the current time.
///
/// See [`categorize_at`].
pub fn categorize(
    branches: &[Branch],
    tracking_by_name: &HashMap<String, TrackingInfo>,
    rules: &[BranchRule],
    stale_branch_days: i64,
) -> CleanupCandidates {
    categorize_at(
        branches,
        tracking_by_name,
        rules,
        stale_branch_days,
        Utc::now().timestamp(),
    )
}

/// Categorize branches relative to `now` (unix seconds).
///
/// - `merged`: branches with a known ahead count of zero, always `safe`.
/// - `gone`: branches whose upstream was deleted, assessed normally.
/// - `stale`: branches not in `merged` whose last commit is strictly older than
///   `stale_branch_days`. Disabled when `stale_branch_days <= 0`.
///
/// Remote-tracking refs are skipped. The HEAD branch should already be filtered
/// out by the caller; if present it is still marked protected.
pub fn categorize_at(
    branches: &[Branch],
    tracking_by_name: &HashMap<String, TrackingInfo>,
    rules: &[BranchRule],
    stale_branch_days: i64,
    now: i64,
) -> CleanupCandidates {
    let mut candidates = CleanupCandidates::default();
    let mut merged_names: HashSet<&str> = HashSet::new();
    let protection = ProtectionRules::new(rules);

    let local: Vec<(&Branch, Option<String>, Option<&TrackingInfo>)> = branches
        .iter()
        .filter(|b| !b.is_remote)
        .map(|b| (b, protection.reason(b), tracking_by_name.get(&b.name)))
        .collect();

    for (branch, protected, tracking) in &local {
        if branch.ahead_behind.is_some_and(|ab| ab.ahead == 0) {
            candidates.merged.push(candidate(
                branch,
                RiskAssessment::fully_merged(),
                protected,
                *tracking,
            ));
            merged_names.insert(branch.name.as_str());
        }

        if tracking.is_some_and(|t| t.is_gone) {
            candidates.gone.push(candidate(
                branch,
                assess(branch, *tracking),
                protected,
                *tracking,
            ));
        }
    }

    if stale_branch_days > 0 {
        let threshold = now.saturating_sub(stale_branch_days.saturating_mul(SECONDS_PER_DAY));

        for (branch, protected, tracking) in &local {
            if merged_names.contains(branch.name.as_str()) {
                continue;
            }
            let Some(ts) = branch.last_commit_timestamp else {
                continue;
            };
            if ts < threshold {
                candidates.stale.push(candidate(
                    branch,
                    assess(branch, *tracking),
                    protected,
                    *tracking,
                ));
            }
        }
    }

    candidates
}

fn candidate(
    branch: &Branch,
    assessment: RiskAssessment,
    protected: &Option<String>,
    tracking: Option<&TrackingInfo>,
) -> CleanupCandidate {
    CleanupCandidate {
        branch: branch.clone(),
        risk: assessment.risk,
        risk_reason: assessment.reason,
        is_protected: protected.is_some(),
        protected_reason: protected.clone(),
        tracking_info: tracking.cloned(),
    }
}
