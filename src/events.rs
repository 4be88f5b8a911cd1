//! Event logging subsystem for branchsweep.
//!
//! Deletions are recorded in an append-only NDJSON log (one JSON object per
//! line) at `<git-common-dir>/branchsweep/events.ndjson`, so a deleted branch
//! and its last commit can be found again later.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: The action performed (branch_delete, prune, clean)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `branch`: Optional branch name for branch-specific events
//! - `details`: Freeform object with action-specific details

use crate::context::RepoContext;
use crate::error::{Result, SweepError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A single branch was deleted
    BranchDelete,
    /// Remote-tracking refs were pruned
    Prune,
    /// Summary of a cleanup run
    Clean,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::BranchDelete => write!(f, "branch_delete"),
            EventAction::Prune => write!(f, "prune"),
            EventAction::Clean => write!(f, "clean"),
        }
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Optional branch name for branch-specific events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action, stamped now.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            branch: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the branch name for this event.
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| SweepError::UserError(format!("failed to serialize event to JSON: {}", e)))
    }
}

/// Get the actor string for event metadata.
pub(crate) fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Get the path to the events file.
pub fn events_file_path(ctx: &RepoContext) -> PathBuf {
    ctx.state_dir.join("events.ndjson")
}

/// Append an event to the events log.
///
/// The file and its directory are created if missing. Each append writes one
/// line with a trailing newline and syncs the file.
pub fn append_event(ctx: &RepoContext, event: &Event) -> Result<()> {
    let events_file = events_file_path(ctx);
    let json_line = event.to_ndjson_line()?;

    if !ctx.state_dir.exists() {
        fs::create_dir_all(&ctx.state_dir).map_err(|e| {
            SweepError::UserError(format!(
                "failed to create state directory '{}': {}",
                ctx.state_dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            SweepError::UserError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        SweepError::UserError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    file.sync_all().map_err(|e| {
        SweepError::UserError(format!(
            "failed to sync events file '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_repo;
    use serde_json::json;

    #[test]
    fn test_event_creation() {
        let event = Event::new(EventAction::Clean);

        assert_eq!(event.action, EventAction::Clean);
        assert!(!event.actor.is_empty());
        assert!(event.branch.is_none());
        let age = Utc::now().signed_duration_since(event.ts);
        assert!(age.num_minutes() < 1);
    }

    #[test]
    fn test_event_serialization() {
        let event = Event::new(EventAction::BranchDelete)
            .with_branch("feature/done")
            .with_details(json!({"force": false, "target_oid": "abc123"}));

        let json_line = event.to_ndjson_line().unwrap();
        assert!(!json_line.contains('\n'));
        assert!(json_line.contains("\"branch_delete\""));

        let parsed: Event = serde_json::from_str(&json_line).unwrap();
        assert_eq!(parsed.action, EventAction::BranchDelete);
        assert_eq!(parsed.branch.as_deref(), Some("feature/done"));
        assert_eq!(parsed.details["force"], false);
    }

    #[test]
    fn test_event_without_branch_omits_field() {
        let event = Event::new(EventAction::Prune);
        let json_line = event.to_ndjson_line().unwrap();
        let parsed: Value = serde_json::from_str(&json_line).unwrap();
        assert!(parsed.get("branch").is_none());
    }

    #[test]
    fn test_event_action_display() {
        assert_eq!(EventAction::BranchDelete.to_string(), "branch_delete");
        assert_eq!(EventAction::Prune.to_string(), "prune");
        assert_eq!(EventAction::Clean.to_string(), "clean");
    }

    #[test]
    fn test_append_event_creates_state_dir_and_appends_lines() {
        let temp_dir = create_test_repo();
        let ctx = RepoContext::resolve_from(temp_dir.path()).unwrap();
        assert!(!ctx.state_dir.exists());

        append_event(&ctx, &Event::new(EventAction::BranchDelete).with_branch("a")).unwrap();
        append_event(&ctx, &Event::new(EventAction::Clean)).unwrap();

        let content = fs::read_to_string(events_file_path(&ctx)).unwrap();
        assert!(content.ends_with('\n'));
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Event = serde_json::from_str(lines[0]).unwrap();
        let second: Event = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first.action, EventAction::BranchDelete);
        assert_eq!(first.branch.as_deref(), Some("a"));
        assert_eq!(second.action, EventAction::Clean);
    }

    #[test]
    fn test_get_actor_string() {
        let actor = get_actor_string();
        assert!(actor.contains('@'));
    }
}
