//! Selection of branches for deletion.
//!
//! A [`Selection`] is an immutable, insertion-ordered set of branch names.
//! Every operation returns a new selection. Protected branches can never enter
//! a selection: the add operations reject them and the bulk operations skip them.

use super::types::{CleanupCandidate, RiskLevel};
use crate::error::{Result, SweepError};

/// An insertion-ordered set of branch names chosen for deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `name` is selected.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Selected names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Add every non-protected candidate of the active category.
    pub fn select_all(&self, candidates_in_active_category: &[CleanupCandidate]) -> Self {
        let mut next = self.clone();
        for candidate in candidates_in_active_category {
            if !candidate.is_protected {
                next.push(candidate.name());
            }
        }
        next
    }

    /// Remove every candidate of the active category.
    pub fn deselect_all(&self, candidates_in_active_category: &[CleanupCandidate]) -> Self {
        let names = self
            .names
            .iter()
            .filter(|n| !candidates_in_active_category.iter().any(|c| c.name() == *n))
            .cloned()
            .collect();
        Self { names }
    }

    /// Flip membership of `candidate`.
    ///
    /// # Returns
    ///
    /// * `Ok(Selection)` - The selection with the candidate added or removed
    /// * `Err(SweepError::ProtectedBranchSelection)` - The candidate is protected
    pub fn toggle(&self, candidate: &CleanupCandidate) -> Result<Self> {
        reject_protected(candidate)?;

        if self.contains(candidate.name()) {
            let names = self
                .names
                .iter()
                .filter(|n| *n != candidate.name())
                .cloned()
                .collect();
            Ok(Self { names })
        } else {
            let mut next = self.clone();
            next.push(candidate.name());
            Ok(next)
        }
    }

    /// Add `candidate` if it is not already selected.
    ///
    /// # Returns
    ///
    /// * `Ok(Selection)` - The selection including the candidate
    /// * `Err(SweepError::ProtectedBranchSelection)` - The candidate is protected
    pub fn select(&self, candidate: &CleanupCandidate) -> Result<Self> {
        reject_protected(candidate)?;

        let mut next = self.clone();
        next.push(candidate.name());
        Ok(next)
    }

    fn push(&mut self, name: &str) {
        if !self.contains(name) {
            self.names.push(name.to_string());
        }
    }
}

fn reject_protected(candidate: &CleanupCandidate) -> Result<()> {
    if candidate.is_protected {
        return Err(SweepError::ProtectedBranchSelection {
            name: candidate.name().to_string(),
            reason: candidate
                .protected_reason
                .clone()
                .unwrap_or_else(|| "protected".to_string()),
        });
    }
    Ok(())
}

/// The initial selection: every non-protected `safe` candidate from `merged`
/// and `gone`, merged first. Stale candidates are never pre-selected.
pub fn default_selection(merged: &[CleanupCandidate], gone: &[CleanupCandidate]) -> Selection {
    let mut selection = Selection::new();
    for candidate in merged.iter().chain(gone.iter()) {
        if candidate.risk == RiskLevel::Safe && !candidate.is_protected {
            selection.push(candidate.name());
        }
    }
    selection
}
