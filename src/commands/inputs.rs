//! Loading the data every command categorizes: config, branches, tracking.

use crate::cleanup::{
    Branch, BranchRule, CleanupCandidates, TrackingInfo, categorize, is_protected,
};
use crate::config::Config;
use crate::context::RepoContext;
use crate::error::Result;
use crate::git_branches::{list_branches, tracking_info};
use std::collections::HashMap;

/// Snapshot of repository state for one command run.
#[derive(Debug)]
pub struct CleanupInputs {
    pub config: Config,
    /// Every branch except the current HEAD.
    pub branches: Vec<Branch>,
    /// The checked-out branch, if HEAD is on one.
    pub head: Option<Branch>,
    /// Tracking info keyed by local branch name.
    pub tracking: HashMap<String, TrackingInfo>,
    pub rules: Vec<BranchRule>,
}

impl CleanupInputs {
    /// Read config and branch state for `ctx`.
    pub fn load(ctx: &RepoContext) -> Result<Self> {
        let config = Config::load_or_default(ctx.config_path())?;
        let rules = config.protection_rules();

        let mut branches = Vec::new();
        let mut head = None;
        for branch in list_branches(&ctx.repo_root)? {
            if branch.is_head {
                head = Some(branch);
            } else {
                branches.push(branch);
            }
        }

        let mut tracking = HashMap::new();
        for branch in branches.iter().filter(|b| !b.is_remote && b.upstream.is_some()) {
            if let Some(info) = tracking_info(&ctx.repo_root, &branch.name)? {
                tracking.insert(branch.name.clone(), info);
            }
        }

        Ok(Self {
            config,
            branches,
            head,
            tracking,
            rules,
        })
    }

    /// Effective stale threshold in days, with the CLI override applied.
    pub fn stale_days(&self, stale_days_override: Option<i64>) -> i64 {
        stale_days_override.unwrap_or(self.config.stale_branch_days)
    }

    /// Categorize the loaded branches.
    pub fn candidates(&self, stale_days_override: Option<i64>) -> CleanupCandidates {
        categorize(
            &self.branches,
            &self.tracking,
            &self.rules,
            self.stale_days(stale_days_override),
        )
    }

    /// Local branches, HEAD first.
    pub fn local_branches(&self) -> impl Iterator<Item = &Branch> {
        self.head
            .iter()
            .chain(self.branches.iter().filter(|b| !b.is_remote))
    }

    /// Look up a local branch (including HEAD) by name.
    pub fn find_local(&self, name: &str) -> Option<&Branch> {
        self.local_branches().find(|b| b.name == name)
    }

    /// Names of local branches that can never be deleted.
    pub fn protected_names(&self) -> Vec<&str> {
        self.local_branches()
            .filter(|b| is_protected(b, &self.rules))
            .map(|b| b.name.as_str())
            .collect()
    }
}
