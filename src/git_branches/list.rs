//! Branch listing via `git for-each-ref`.

use crate::cleanup::{AheadBehind, Branch};
use crate::error::Result;
use crate::git::run_git;
use std::path::Path;

/// Tab-separated fields: refname, short name, HEAD marker, upstream, object id,
/// committer date (unix seconds). Ref names cannot contain control characters.
const BRANCH_FORMAT: &str = "--format=%(refname)%09%(refname:short)%09%(HEAD)%09%(upstream:short)%09%(objectname)%09%(committerdate:unix)";

/// List local and remote-tracking branches.
///
/// For local branches, `ahead_behind` is computed against the current HEAD. It
/// is `None` when HEAD does not resolve (unborn branch).
pub fn list_branches<P: AsRef<Path>>(repo_root: P) -> Result<Vec<Branch>> {
    let repo_root = repo_root.as_ref();

    let output = run_git(
        repo_root,
        &["for-each-ref", BRANCH_FORMAT, "refs/heads", "refs/remotes"],
    )?;

    let head_resolves = run_git(repo_root, &["rev-parse", "--verify", "--quiet", "HEAD"]).is_ok();

    let mut branches = Vec::new();
    for line in output.lines() {
        let Some(mut branch) = parse_branch_line(line) else {
            continue;
        };
        if !branch.is_remote && head_resolves {
            branch.ahead_behind = ahead_behind_head(repo_root, &branch.name);
        }
        branches.push(branch);
    }

    Ok(branches)
}

/// Count commits on `branch` missing from HEAD (ahead) and vice versa (behind).
fn ahead_behind_head(repo_root: &Path, branch: &str) -> Option<AheadBehind> {
    let range = format!("refs/heads/{}...HEAD", branch);
    let output = run_git(repo_root, &["rev-list", "--left-right", "--count", &range]).ok()?;
    parse_left_right_count(&output.stdout)
}

/// Parse one `for-each-ref` line produced with [`BRANCH_FORMAT`].
///
/// Returns `None` for malformed lines and for symbolic `<remote>/HEAD` refs.
fn parse_branch_line(line: &str) -> Option<Branch> {
    let fields: Vec<&str> = line.split('\t').collect();
    let [refname, short, head, upstream, oid, date] = fields.as_slice() else {
        return None;
    };

    let (name, is_remote) = if let Some(name) = refname.strip_prefix("refs/heads/") {
        (name, false)
    } else if let Some(name) = refname.strip_prefix("refs/remotes/") {
        if name.ends_with("/HEAD") {
            return None;
        }
        (name, true)
    } else {
        return None;
    };

    Some(Branch {
        name: name.to_string(),
        shorthand: short.to_string(),
        is_head: head.trim() == "*",
        is_remote,
        upstream: (!upstream.is_empty()).then(|| upstream.to_string()),
        target_oid: oid.to_string(),
        ahead_behind: None,
        last_commit_timestamp: date.trim().parse().ok(),
        is_stale: false,
    })
}

/// Parse `git rev-list --left-right --count` output (`<left>\t<right>`).
fn parse_left_right_count(output: &str) -> Option<AheadBehind> {
    let mut parts = output.split_whitespace();
    let ahead = parts.next()?.parse().ok()?;
    let behind = parts.next()?.parse().ok()?;
    Some(AheadBehind { ahead, behind })
}
