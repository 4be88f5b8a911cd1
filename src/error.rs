//! Error types for the branchsweep CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for branchsweep operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum SweepError {
    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Malformed input such as an empty rule pattern or an invalid config value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A protected branch was offered for selection.
    #[error("branch '{name}' is protected ({reason}) and cannot be selected for deletion")]
    ProtectedBranchSelection { name: String, reason: String },

    /// A single branch deletion failed, which stops the remaining plan.
    #[error("failed to delete branch '{name}': {message}")]
    DeletionFailure { name: String, message: String },

    /// Pruning remote-tracking refs failed after the deletions.
    #[error("failed to prune remote-tracking branches: {0}")]
    PruneFailure(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Lock could not be acquired.
    #[error("Lock acquisition failed: {0}")]
    LockError(String),
}

impl SweepError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::UserError(_)
            | SweepError::InvalidInput(_)
            | SweepError::ProtectedBranchSelection { .. } => exit_codes::USER_ERROR,
            SweepError::DeletionFailure { .. } | SweepError::PruneFailure(_) => {
                exit_codes::CLEANUP_FAILURE
            }
            SweepError::GitError(_) => exit_codes::GIT_FAILURE,
            SweepError::LockError(_) => exit_codes::LOCK_FAILURE,
        }
    }
}

/// Result type alias for branchsweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_errors_exit_with_user_error() {
        let errs = [
            SweepError::UserError("bad argument".to_string()),
            SweepError::InvalidInput("empty pattern".to_string()),
            SweepError::ProtectedBranchSelection {
                name: "main".to_string(),
                reason: "Default branch".to_string(),
            },
        ];
        for err in errs {
            assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        }
    }

    #[test]
    fn cleanup_errors_have_cleanup_exit_code() {
        let err = SweepError::DeletionFailure {
            name: "feature/x".to_string(),
            message: "not fully merged".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::CLEANUP_FAILURE);

        let err = SweepError::PruneFailure("remote unreachable".to_string());
        assert_eq!(err.exit_code(), exit_codes::CLEANUP_FAILURE);
    }

    #[test]
    fn git_and_lock_errors_have_own_exit_codes() {
        assert_eq!(
            SweepError::GitError("for-each-ref".to_string()).exit_code(),
            exit_codes::GIT_FAILURE
        );
        assert_eq!(
            SweepError::LockError("held".to_string()).exit_code(),
            exit_codes::LOCK_FAILURE
        );
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = SweepError::ProtectedBranchSelection {
            name: "main".to_string(),
            reason: "Default branch".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "branch 'main' is protected (Default branch) and cannot be selected for deletion"
        );

        let err = SweepError::DeletionFailure {
            name: "feature/x".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "failed to delete branch 'feature/x': boom");
    }
}
