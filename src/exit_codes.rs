//! Exit code constants for the branchsweep CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, protected selection)
//! - 2: Cleanup failure (a branch deletion or the prune step failed)
//! - 3: Git operation failure
//! - 4: Lock acquisition failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid input, or a rejected selection.
pub const USER_ERROR: i32 = 1;

/// Cleanup failure: a deletion stopped the plan or the prune step failed.
pub const CLEANUP_FAILURE: i32 = 2;

/// Git operation failure: listing refs, reading tracking info.
pub const GIT_FAILURE: i32 = 3;

/// Lock acquisition failure: another cleanup run holds the run lock.
pub const LOCK_FAILURE: i32 = 4;
