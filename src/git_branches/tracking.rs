//! Upstream tracking info via `git for-each-ref`.

use crate::cleanup::TrackingInfo;
use crate::error::Result;
use crate::git::run_git;
use std::path::Path;

const TRACKING_FORMAT: &str =
    "--format=%(upstream)%09%(upstream:remotename)%09%(upstream:track,nobracket)";

/// Read the tracking state of local branch `branch`.
///
/// # Returns
///
/// * `Ok(Some(TrackingInfo))` - The branch has an upstream configured
/// * `Ok(None)` - No upstream configured (or no such branch)
/// * `Err(SweepError::GitError)` - The git call failed
pub fn tracking_info<P: AsRef<Path>>(repo_root: P, branch: &str) -> Result<Option<TrackingInfo>> {
    let refname = format!("refs/heads/{}", branch);
    let output = run_git(repo_root, &["for-each-ref", TRACKING_FORMAT, &refname])?;

    Ok(output
        .lines()
        .first()
        .and_then(|line| parse_tracking_line(branch, line)))
}

/// Parse a line produced with [`TRACKING_FORMAT`].
fn parse_tracking_line(local_branch: &str, line: &str) -> Option<TrackingInfo> {
    let mut fields = line.splitn(3, '\t');
    let upstream = fields.next().unwrap_or("").trim();
    let remote = fields.next().unwrap_or("").trim();
    let track = fields.next().unwrap_or("").trim();

    if upstream.is_empty() {
        return None;
    }

    let remote = (!remote.is_empty()).then(|| remote.to_string());
    let remote_branch = match remote.as_deref() {
        Some(".") => upstream.strip_prefix("refs/heads/"),
        Some(r) => upstream
            .strip_prefix("refs/remotes/")
            .and_then(|rest| rest.strip_prefix(r))
            .and_then(|rest| rest.strip_prefix('/')),
        None => None,
    }
    .map(str::to_string);

    let (ahead, behind, is_gone) = parse_track(track);

    Some(TrackingInfo {
        local_branch: local_branch.to_string(),
        upstream: Some(upstream.to_string()),
        ahead,
        behind,
        remote,
        remote_branch,
        is_gone,
    })
}

/// Parse `%(upstream:track,nobracket)`: empty, `gone`, or `ahead N, behind M`.
fn parse_track(track: &str) -> (u32, u32, bool) {
    if track == "gone" {
        return (0, 0, true);
    }

    let mut ahead = 0;
    let mut behind = 0;
    for part in track.split(',').map(str::trim) {
        if let Some(n) = part.strip_prefix("ahead ") {
            ahead = n.parse().unwrap_or(0);
        } else if let Some(n) = part.strip_prefix("behind ") {
            behind = n.parse().unwrap_or(0);
        }
    }
    (ahead, behind, false)
}
