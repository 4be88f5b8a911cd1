//! Pruning of stale remote-tracking refs.

use crate::error::{Result, SweepError};
use crate::git::run_git;
use std::path::Path;

/// Run `git remote prune` for `remote`, or for every remote when `None`.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The remote-tracking refs that were pruned
/// * `Err(SweepError::GitError)` - The remote does not exist or prune failed
pub fn prune_remote_tracking<P: AsRef<Path>>(
    repo_root: P,
    remote: Option<&str>,
) -> Result<Vec<String>> {
    let repo_root = repo_root.as_ref();

    let remotes_output = run_git(repo_root, &["remote"])?;
    let remotes = remotes_output.lines();

    let targets: Vec<&str> = match remote {
        Some(name) => {
            if !remotes.contains(&name) {
                return Err(SweepError::GitError(format!(
                    "remote '{}' does not exist.\n\n\
                     Set a different remote in .branchsweep.yaml (remote: <name>) or pass --remote.",
                    name
                )));
            }
            vec![name]
        }
        None => remotes,
    };

    let mut pruned = Vec::new();
    for target in targets {
        let output = run_git(repo_root, &["remote", "prune", target])?;
        pruned.extend(parse_pruned(&output.stdout));
        pruned.extend(parse_pruned(&output.stderr));
    }

    Ok(pruned)
}

/// Extract ref names from ` * [pruned] <ref>` lines.
fn parse_pruned(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.trim().strip_prefix("* [pruned] "))
        .map(|r| r.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_test_repo, create_test_repo_with_remote, git};

    #[test]
    fn test_parse_pruned() {
        let output = "Pruning origin\nURL: /tmp/remote.git\n * [pruned] origin/feature/a\n * [pruned] origin/old\n";
        assert_eq!(parse_pruned(output), vec!["origin/feature/a", "origin/old"]);
        assert!(parse_pruned("").is_empty());
    }

    #[test]
    fn test_prune_missing_remote() {
        let temp_dir = create_test_repo();
        let err = prune_remote_tracking(temp_dir.path(), Some("nonexistent")).unwrap_err();
        assert!(matches!(err, SweepError::GitError(_)));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_prune_without_remotes_is_empty() {
        let temp_dir = create_test_repo();
        assert!(prune_remote_tracking(temp_dir.path(), None).unwrap().is_empty());
    }

    #[test]
    fn test_prune_removes_deleted_remote_branch() {
        let repo = create_test_repo_with_remote();
        let work = repo.work();

        git(work, &["push", "origin", "main:feature/pushed"]);
        git(work, &["fetch", "origin"]);
        git(repo.remote(), &["branch", "-D", "feature/pushed"]);

        let pruned = prune_remote_tracking(work, Some("origin")).unwrap();
        assert_eq!(pruned, vec!["origin/feature/pushed"]);

        let again = prune_remote_tracking(work, None).unwrap();
        assert!(again.is_empty());
    }
}
