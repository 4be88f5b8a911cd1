use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A working repository plus a bare repository registered as its `origin`.
pub(crate) struct RepoWithRemote {
    _dir: TempDir,
    work: PathBuf,
    remote: PathBuf,
}

impl RepoWithRemote {
    pub(crate) fn work(&self) -> &Path {
        &self.work
    }

    pub(crate) fn remote(&self) -> &Path {
        &self.remote
    }
}

/// Repository on `main` with a single commit and no remotes.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());
    temp_dir
}

/// Repository whose `main` is pushed to a bare `origin`.
pub(crate) fn create_test_repo_with_remote() -> RepoWithRemote {
    let dir = TempDir::new().unwrap();
    let work = dir.path().join("work");
    let remote = dir.path().join("remote.git");
    std::fs::create_dir_all(&work).unwrap();
    std::fs::create_dir_all(&remote).unwrap();

    git(&remote, &["init", "--bare"]);
    git(&remote, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    init_repo(&work);
    let remote_str = remote.to_string_lossy().to_string();
    git(&work, &["remote", "add", "origin", &remote_str]);
    git(&work, &["push", "-u", "origin", "main"]);

    RepoWithRemote {
        _dir: dir,
        work,
        remote,
    }
}

fn init_repo(path: &Path) {
    git(path, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    // This sets HEAD to an unborn `main` branch before the first commit.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
}

/// Write `file` and commit it on the current branch.
pub(crate) fn commit_file(repo_dir: &Path, file: &str, message: &str) {
    std::fs::write(repo_dir.join(file), format!("{}\n", message)).unwrap();
    git(repo_dir, &["add", file]);
    git(repo_dir, &["commit", "-m", message]);
}

/// Like [`commit_file`], with author and committer dates set to `timestamp`.
pub(crate) fn commit_file_at(repo_dir: &Path, file: &str, message: &str, timestamp: i64) {
    let date = format!("@{} +0000", timestamp);
    std::fs::write(repo_dir.join(file), format!("{}\n", message)).unwrap();
    git(repo_dir, &["add", file]);
    run(
        repo_dir,
        &["commit", "-m", message],
        &[("GIT_AUTHOR_DATE", &date), ("GIT_COMMITTER_DATE", &date)],
    );
}

pub(crate) fn branch_exists(repo_dir: &Path, branch: &str) -> bool {
    let refname = format!("refs/heads/{}", branch);
    Command::new("git")
        .current_dir(repo_dir)
        .args(["show-ref", "--verify", "--quiet", &refname])
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run git, panicking on failure. Returns trimmed stdout.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    run(repo_dir, args, &[])
}

fn run(repo_dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .envs(envs.iter().copied())
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
