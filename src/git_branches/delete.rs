//! Local branch deletion.

use crate::error::{Result, SweepError};
use crate::git::run_git;
use std::path::Path;

/// Delete a local branch.
///
/// Uses `git branch -d <branch>` (safe delete, requires fully merged), or
/// `-D` when `force` is set.
///
/// # Returns
///
/// * `Ok(())` - Branch deleted successfully
/// * `Err(SweepError::DeletionFailure)` - Git refused or failed (exit code 2)
pub fn delete_branch<P: AsRef<Path>>(repo_root: P, branch: &str, force: bool) -> Result<()> {
    let delete_flag = if force { "-D" } else { "-d" };

    run_git(repo_root, &["branch", delete_flag, branch]).map_err(|e| {
        let detail = match e {
            SweepError::GitError(msg) => msg,
            other => other.to_string(),
        };
        let force_hint = if !force {
            format!(
                "\n\nIf you have checked that its commits are safe to lose, \
                 use force deletion: git branch -D {}",
                branch
            )
        } else {
            String::new()
        };

        SweepError::DeletionFailure {
            name: branch.to_string(),
            message: format!("{}{}", detail, force_hint),
        }
    })?;

    Ok(())
}
