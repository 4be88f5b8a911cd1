//! Data types for branch cleanup.
//!
//! Field names serialize as camelCase so `list --json` emits the same shapes a
//! desktop client consumes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A branch snapshot taken for one categorization pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Ref-relative name (`feature/x`, or `origin/feature/x` for remote refs).
    pub name: String,
    /// Short display name.
    pub shorthand: String,
    /// Whether this branch is currently checked out.
    pub is_head: bool,
    /// Whether this is a remote-tracking ref.
    pub is_remote: bool,
    /// Configured upstream ref (e.g. `origin/feature/x`), if any.
    pub upstream: Option<String>,
    /// Object id the branch points at.
    pub target_oid: String,
    /// Ahead/behind counts relative to the current HEAD.
    pub ahead_behind: Option<AheadBehind>,
    /// Unix timestamp (seconds) of the last commit on this branch.
    pub last_commit_timestamp: Option<i64>,
    /// Staleness hint from the branch source. Not authoritative.
    pub is_stale: bool,
}

/// Ahead/behind commit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AheadBehind {
    pub ahead: u32,
    pub behind: u32,
}

/// A user-defined branch protection rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRule {
    /// Glob pattern matched against the full branch name (`*` is the only wildcard).
    pub pattern: String,
    /// Whether matching branches must never be deleted.
    #[serde(default)]
    pub prevent_deletion: bool,
}

/// Upstream tracking state of a local branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInfo {
    /// The local branch name.
    pub local_branch: String,
    /// The full upstream reference (e.g. `refs/remotes/origin/main`).
    pub upstream: Option<String>,
    /// Commits ahead of upstream.
    pub ahead: u32,
    /// Commits behind upstream.
    pub behind: u32,
    /// The remote name (e.g. `origin`).
    pub remote: Option<String>,
    /// The branch name on the remote (e.g. `main`).
    pub remote_branch: Option<String>,
    /// Whether the upstream ref was deleted on the remote.
    pub is_gone: bool,
}

/// How likely deleting a branch is to lose work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Warning,
    Danger,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Safe => write!(f, "safe"),
            RiskLevel::Warning => write!(f, "warning"),
            RiskLevel::Danger => write!(f, "danger"),
        }
    }
}

/// Cleanup candidate category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Fully merged into the current branch.
    Merged,
    /// Last commit older than the stale threshold.
    Stale,
    /// Upstream was deleted on the remote.
    Gone,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Merged, Category::Stale, Category::Gone];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Merged => write!(f, "merged"),
            Category::Stale => write!(f, "stale"),
            Category::Gone => write!(f, "gone"),
        }
    }
}

/// A branch offered for deletion, with its assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupCandidate {
    pub branch: Branch,
    pub risk: RiskLevel,
    pub risk_reason: String,
    pub is_protected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_info: Option<TrackingInfo>,
}

impl CleanupCandidate {
    /// The branch name this candidate refers to.
    pub fn name(&self) -> &str {
        &self.branch.name
    }
}

/// Candidates partitioned by category.
///
/// A branch may appear in several lists, but never in both `merged` and `stale`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupCandidates {
    pub merged: Vec<CleanupCandidate>,
    pub stale: Vec<CleanupCandidate>,
    pub gone: Vec<CleanupCandidate>,
}

impl CleanupCandidates {
    /// Candidates of one category.
    pub fn get(&self, category: Category) -> &[CleanupCandidate] {
        match category {
            Category::Merged => &self.merged,
            Category::Stale => &self.stale,
            Category::Gone => &self.gone,
        }
    }

    /// Find the first candidate with this name, looking in merged, gone, then stale.
    pub fn find(&self, name: &str) -> Option<&CleanupCandidate> {
        self.merged
            .iter()
            .chain(self.gone.iter())
            .chain(self.stale.iter())
            .find(|c| c.name() == name)
    }

    /// Total number of entries across all lists (a branch in two lists counts twice).
    pub fn total(&self) -> usize {
        self.merged.len() + self.stale.len() + self.gone.len()
    }

    /// Returns true if no category has any candidate.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
