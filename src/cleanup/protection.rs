//! Protection rules: which branches may never be deleted.

use super::glob::{self, GlobPattern};
use super::types::{Branch, BranchRule};

/// Branch names that are always protected (exact, case-sensitive).
pub const BUILTIN_PROTECTED: [&str; 6] = [
    "main",
    "master",
    "develop",
    "development",
    "staging",
    "production",
];

/// Returns why `branch` is protected, or `None` if it may be deleted.
///
/// Checked in order: current HEAD, built-in names, then rules with
/// `prevent_deletion` whose pattern matches the branch name.
pub fn protection_reason(branch: &Branch, rules: &[BranchRule]) -> Option<String> {
    builtin_reason(branch).map(str::to_string).or_else(|| {
        rules
            .iter()
            .filter(|rule| rule.prevent_deletion)
            .find(|rule| glob::matches(&branch.name, &rule.pattern))
            .map(|rule| rule_reason(&rule.pattern))
    })
}

/// Returns true if `branch` must never be deleted.
pub fn is_protected(branch: &Branch, rules: &[BranchRule]) -> bool {
    protection_reason(branch, rules).is_some()
}

/// Protection rules with their patterns compiled once, for evaluating many
/// branches. Same decisions as [`protection_reason`].
pub(crate) struct ProtectionRules {
    patterns: Vec<(GlobPattern, String)>,
}

impl ProtectionRules {
    /// Compile the `prevent_deletion` rules. A pattern that does not compile
    /// matches nothing.
    pub(crate) fn new(rules: &[BranchRule]) -> Self {
        let patterns = rules
            .iter()
            .filter(|rule| rule.prevent_deletion)
            .filter_map(|rule| {
                GlobPattern::new(&rule.pattern)
                    .ok()
                    .map(|glob| (glob, rule.pattern.clone()))
            })
            .collect();
        Self { patterns }
    }

    pub(crate) fn reason(&self, branch: &Branch) -> Option<String> {
        builtin_reason(branch).map(str::to_string).or_else(|| {
            self.patterns
                .iter()
                .find(|(glob, _)| glob.is_match(&branch.name))
                .map(|(_, pattern)| rule_reason(pattern))
        })
    }
}

fn builtin_reason(branch: &Branch) -> Option<&'static str> {
    if branch.is_head {
        Some("Current branch")
    } else if BUILTIN_PROTECTED.contains(&branch.name.as_str()) {
        Some("Default branch")
    } else {
        None
    }
}

fn rule_reason(pattern: &str) -> String {
    format!("Protected by rule '{}'", pattern)
}
