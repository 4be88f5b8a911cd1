//! Branch cleanup risk assessment and categorization.
//!
//! Given the branch list, upstream tracking data, and protection rules, this
//! module decides:
//! - which local branches are deletion candidates (`merged`, `stale`, `gone`)
//! - how risky deleting each one is, and why
//! - which branches are protected and must never be selected
//! - what the default bulk selection is
//!
//! Everything except [`execute`] is pure. `execute` calls the injected delete and
//! prune functions sequentially; callers serialize concurrent runs themselves
//! (the CLI holds `cleanup.lock`).

mod categorize;
mod deletion;
mod glob;
mod protection;
mod risk;
mod selection;
mod types;


pub use categorize::categorize;
pub use deletion::{DeletionOutcome, DeletionStep, execute, plan};
pub use glob::GlobPattern;
pub use protection::{is_protected, protection_reason};
pub use selection::{Selection, default_selection};
pub use types::{
    AheadBehind, Branch, BranchRule, Category, CleanupCandidate, CleanupCandidates, TrackingInfo,
};

#[cfg(test)]
pub use types::RiskLevel;
