//! Risk assessment for deleting a single branch.

use super::types::{Branch, RiskLevel, TrackingInfo};

/// Reason given for every branch with no commits beyond the current HEAD.
pub const FULLY_MERGED_REASON: &str = "Fully merged into current branch";

/// A risk level paired with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    pub risk: RiskLevel,
    pub reason: String,
}

impl RiskAssessment {
    fn new(risk: RiskLevel, reason: impl Into<String>) -> Self {
        Self {
            risk,
            reason: reason.into(),
        }
    }

    /// The assessment for a branch fully merged into HEAD.
    pub fn fully_merged() -> Self {
        Self::new(RiskLevel::Safe, FULLY_MERGED_REASON)
    }
}

/// Assess how risky deleting `branch` is.
///
/// `ahead` counts commits on the branch that the current HEAD lacks; a missing
/// count is treated as zero.
pub fn assess(branch: &Branch, tracking: Option<&TrackingInfo>) -> RiskAssessment {
    let ahead = branch.ahead_behind.map(|ab| ab.ahead).unwrap_or(0);
    let is_gone = tracking.is_some_and(|t| t.is_gone);

    if ahead == 0 {
        RiskAssessment::fully_merged()
    } else if is_gone {
        RiskAssessment::new(
            RiskLevel::Danger,
            format!("Remote deleted with {} unpushed {}", ahead, commits(ahead)),
        )
    } else if ahead > 0 {
        RiskAssessment::new(
            RiskLevel::Warning,
            format!("Has {} unpushed {}", ahead, commits(ahead)),
        )
    // The two arms below cannot be reached: every `ahead` value is handled
    // above. They mark where never-pushed branches would get their own
    // assessment.
    } else if branch.upstream.is_none() {
        RiskAssessment::new(RiskLevel::Warning, "No upstream configured")
    } else {
        RiskAssessment::new(RiskLevel::Safe, "No unpushed work")
    }
}

fn commits(count: u32) -> &'static str {
    if count == 1 { "commit" } else { "commits" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleanup::tests::{branch_with_ahead, tracking};

    #[test]
    fn test_zero_ahead_is_safe() {
        let b = branch_with_ahead("feature/done", 0);
        let a = assess(&b, None);
        assert_eq!(a.risk, RiskLevel::Safe);
        assert_eq!(a.reason, "Fully merged into current branch");
    }

    #[test]
    fn test_zero_ahead_is_safe_even_when_gone() {
        let b = branch_with_ahead("feature/done", 0);
        let t = tracking("feature/done", true);
        assert_eq!(assess(&b, Some(&t)).risk, RiskLevel::Safe);
    }

    #[test]
    fn test_missing_ahead_behind_counts_as_zero() {
        let mut b = branch_with_ahead("feature/unknown", 0);
        b.ahead_behind = None;
        assert_eq!(assess(&b, None), RiskAssessment::fully_merged());
    }

    #[test]
    fn test_unpushed_commits_are_a_warning() {
        let b = branch_with_ahead("feature/wip", 3);
        let a = assess(&b, None);
        assert_eq!(a.risk, RiskLevel::Warning);
        assert_eq!(a.reason, "Has 3 unpushed commits");
    }

    #[test]
    fn test_gone_with_unpushed_commits_is_danger() {
        let b = branch_with_ahead("feature/lost", 2);
        let t = tracking("feature/lost", true);
        let a = assess(&b, Some(&t));
        assert_eq!(a.risk, RiskLevel::Danger);
        assert_eq!(a.reason, "Remote deleted with 2 unpushed commits");
    }

    #[test]
    fn test_tracked_but_not_gone_is_a_warning() {
        let b = branch_with_ahead("feature/wip", 2);
        let t = tracking("feature/wip", false);
        assert_eq!(assess(&b, Some(&t)).risk, RiskLevel::Warning);
    }

    #[test]
    fn test_single_commit_is_singular() {
        let b = branch_with_ahead("feature/one", 1);
        let warning = assess(&b, None);
        assert!(warning.reason.contains("1 unpushed commit"));
        assert!(!warning.reason.contains("commits"));

        let t = tracking("feature/one", true);
        let danger = assess(&b, Some(&t));
        assert!(danger.reason.contains("1 unpushed commit"));
        assert!(!danger.reason.contains("commits"));
    }

    #[test]
    fn test_no_upstream_with_unpushed_commits_still_reports_commits() {
        let mut b = branch_with_ahead("feature/local-only", 4);
        b.upstream = None;
        let a = assess(&b, None);
        assert_eq!(a.risk, RiskLevel::Warning);
        assert_eq!(a.reason, "Has 4 unpushed commits");
    }
}
