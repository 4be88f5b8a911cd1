//! Git branch collaborators: listing, tracking info, deletion, and pruning.
//!
//! These wrap `git` subprocess calls and turn their output into the
//! [`crate::cleanup`] data model. Output parsing lives in small pure functions
//! so it can be tested without a repository.

mod delete;
mod list;
mod prune;
mod tracking;

pub use delete::delete_branch;
pub use list::list_branches;
pub use prune::prune_remote_tracking;
pub use tracking::tracking_info;
