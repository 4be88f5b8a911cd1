//! Config struct definition and default implementation.

use crate::cleanup::BranchRule;
use serde::{Deserialize, Serialize};

/// Configuration for branch cleanup.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Age in days after which an unmerged branch counts as stale.
    /// Zero or negative disables the stale category.
    #[serde(default = "default_stale_branch_days")]
    pub stale_branch_days: i64,

    /// Whether `clean` prunes remote-tracking refs after deleting branches.
    #[serde(default)]
    pub prune_remote_tracking: bool,

    /// Remote to prune. When absent, every configured remote is pruned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,

    /// Protection rules matched against branch names.
    #[serde(default)]
    pub branch_rules: Vec<BranchRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stale_branch_days: default_stale_branch_days(),
            prune_remote_tracking: false,
            remote: None,
            branch_rules: Vec::new(),
        }
    }
}

pub(crate) fn default_stale_branch_days() -> i64 {
    90
}
