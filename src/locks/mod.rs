//! Run lock for branchsweep.
//!
//! `clean --yes` holds `<git-common-dir>/branchsweep/locks/cleanup.lock` while it
//! deletes branches, so two cleanup runs never interleave their deletions.
//!
//! The lock file is created with **create_new** semantics (exclusive create)
//! and holds JSON metadata:
//! - `owner`: The owner of the lock (e.g., `user@HOST`)
//! - `pid`: The process ID (optional)
//! - `created_at`: RFC3339 timestamp
//! - `action`: The action being performed
//!
//! The lock is released when its guard is dropped. If deletion fails
//! during drop, a warning is printed but the program does not crash.

mod guard;
mod metadata;
mod operations;


pub use operations::acquire_cleanup_lock;
