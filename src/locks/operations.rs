//! Lock acquisition.

use super::guard::LockGuard;
use super::metadata::LockMetadata;
use crate::context::RepoContext;
use crate::error::{Result, SweepError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Acquire a lock file using create_new semantics.
///
/// # Returns
///
/// * `Ok(LockGuard)` - Successfully acquired lock with RAII guard
/// * `Err(SweepError::LockError)` - Lock already exists (exit code 4)
fn acquire_lock(lock_path: &Path, metadata: &LockMetadata) -> Result<LockGuard> {
    if let Some(parent) = lock_path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            SweepError::UserError(format!(
                "failed to create locks directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(lock_path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                let existing_info = match LockMetadata::from_file(lock_path) {
                    Ok(meta) => format!(
                        "\nLock: {} (created {} ago by {})\nAction: {}",
                        lock_path.display(),
                        meta.age_string(),
                        meta.owner,
                        meta.action
                    ),
                    Err(_) => format!("\nLock: {}", lock_path.display()),
                };
                SweepError::LockError(format!(
                    "another cleanup is in progress{}\n\n\
                     If that process has crashed, remove the lock file and retry.",
                    existing_info
                ))
            } else {
                SweepError::LockError(format!(
                    "failed to acquire lock '{}': {}",
                    lock_path.display(),
                    e
                ))
            }
        })?;

    let json = metadata.to_json()?;
    file.write_all(json.as_bytes()).map_err(|e| {
        let _ = fs::remove_file(lock_path);
        SweepError::LockError(format!("failed to write lock metadata: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(lock_path);
        SweepError::LockError(format!("failed to sync lock file: {}", e))
    })?;

    Ok(LockGuard::new(lock_path.to_path_buf()))
}

/// Acquire the run lock that serializes branch deletion.
///
/// # Arguments
///
/// * `ctx` - The repository context
/// * `action` - The action being performed (for lock metadata)
pub fn acquire_cleanup_lock(ctx: &RepoContext, action: &str) -> Result<LockGuard> {
    let metadata = LockMetadata::new(action);
    acquire_lock(&ctx.cleanup_lock_path(), &metadata)
}
