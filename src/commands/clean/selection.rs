//! Building the selection from `clean` arguments.

use crate::commands::inputs::CleanupInputs;
use crate::cleanup::{
    Category, CleanupCandidate, CleanupCandidates, Selection, default_selection,
    protection_reason,
};
use crate::cli::CleanArgs;
use crate::error::{Result, SweepError};

/// Turn `args` into a selection over `candidates`.
pub fn build_selection(
    inputs: &CleanupInputs,
    candidates: &CleanupCandidates,
    args: &CleanArgs,
) -> Result<Selection> {
    if !args.branches.is_empty() {
        return select_named(inputs, candidates, &args.branches, args.category);
    }

    if args.all {
        let category = args.category.unwrap_or(Category::Merged);
        return Ok(Selection::new().select_all(candidates.get(category)));
    }

    Ok(match args.category {
        None => default_selection(&candidates.merged, &candidates.gone),
        Some(Category::Merged) => default_selection(&candidates.merged, &[]),
        Some(Category::Gone) => default_selection(&[], &candidates.gone),
        // Stale branches are never selected by default.
        Some(Category::Stale) => Selection::new(),
    })
}

fn select_named(
    inputs: &CleanupInputs,
    candidates: &CleanupCandidates,
    names: &[String],
    category: Option<Category>,
) -> Result<Selection> {
    let mut selection = Selection::new();

    for name in names {
        let candidate: Option<&CleanupCandidate> = match category {
            Some(category) => candidates.get(category).iter().find(|c| c.name() == name),
            None => candidates.find(name),
        };

        if let Some(candidate) = candidate {
            selection = selection.select(candidate)?;
            continue;
        }

        if let Some(reason) = inputs
            .find_local(name)
            .and_then(|branch| protection_reason(branch, &inputs.rules))
        {
            return Err(SweepError::ProtectedBranchSelection {
                name: name.clone(),
                reason,
            });
        }

        let scope = category
            .map(|c| format!(" in category '{}'", c))
            .unwrap_or_default();
        return Err(SweepError::UserError(format!(
            "branch '{}' is not a cleanup candidate{}.\n\n\
             Run `branchsweep list` to see candidates.",
            name, scope
        )));
    }

    Ok(selection)
}
