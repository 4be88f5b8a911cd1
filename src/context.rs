//! Repository context resolution for branchsweep.
//!
//! Finds the Git repository root from any working directory and resolves the
//! paths branchsweep reads and writes: the optional config file at the repo root
//! and the untracked state directory inside the common git directory.

use crate::error::{Result, SweepError};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// Config file name at the repository root.
pub const CONFIG_FILE_NAME: &str = ".branchsweep.yaml";

/// State directory name inside the common git directory.
pub const STATE_DIR_NAME: &str = "branchsweep";

/// Resolved paths for a branchsweep run. All paths are absolute.
#[derive(Debug, Clone)]
pub struct RepoContext {
    /// Root of the worktree the command was invoked from.
    pub repo_root: PathBuf,

    /// Untracked state directory (`<git-common-dir>/branchsweep/`).
    pub state_dir: PathBuf,

    /// Directory holding the run lock (`{state_dir}/locks/`).
    pub locks_dir: PathBuf,
}

impl RepoContext {
    /// Resolve the context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(RepoContext)` - Successfully resolved context
    /// * `Err(SweepError::UserError)` - If not in a git repository (exit code 1)
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            SweepError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd)
    }

    /// Resolve the context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let cwd = cwd.as_ref();

        let repo_root = git::get_repo_root(cwd)?;
        let git_common_dir = git::get_common_dir(&repo_root)?;
        let state_dir = git_common_dir.join(STATE_DIR_NAME);
        let locks_dir = state_dir.join("locks");

        Ok(Self {
            repo_root,
            state_dir,
            locks_dir,
        })
    }

    /// Path to the optional config file.
    pub fn config_path(&self) -> PathBuf {
        self.repo_root.join(CONFIG_FILE_NAME)
    }

    /// Path to the run lock held while branches are being deleted.
    pub fn cleanup_lock_path(&self) -> PathBuf {
        self.locks_dir.join("cleanup.lock")
    }
}
