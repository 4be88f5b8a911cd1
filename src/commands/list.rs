//! Implementation of the `branchsweep list` command.

use super::inputs::CleanupInputs;
use crate::cleanup::{Category, CleanupCandidate, Selection, default_selection};
use crate::cli::ListArgs;
use crate::context::RepoContext;
use crate::error::{Result, SweepError};

/// Execute the `branchsweep list` command.
pub fn cmd_list(args: ListArgs) -> Result<()> {
    let ctx = RepoContext::resolve()?;
    run_list(&ctx, &args)
}

pub(crate) fn run_list(ctx: &RepoContext, args: &ListArgs) -> Result<()> {
    let inputs = CleanupInputs::load(ctx)?;
    let candidates = inputs.candidates(args.stale_days);

    if args.json {
        let json = match args.category {
            Some(category) => serde_json::to_string_pretty(candidates.get(category)),
            None => serde_json::to_string_pretty(&candidates),
        }
        .map_err(|e| SweepError::UserError(format!("failed to serialize candidates: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    let selection = default_selection(&candidates.merged, &candidates.gone);
    let stale_days = inputs.stale_days(args.stale_days);
    let categories = match args.category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        let list = candidates.get(category);
        println!("{}", category_header(category, list.len(), stale_days));
        if list.is_empty() {
            println!("  (none)");
        }
        for candidate in list {
            println!("{}", format_candidate(candidate, &selection));
        }
        println!();
    }

    let protected = inputs.protected_names();
    if !protected.is_empty() {
        println!("Protected: {}", protected.join(", "));
    }
    if candidates.is_empty() {
        println!("No cleanup candidates found.");
    } else {
        println!(
            "{} candidate(s). Branches marked * are selected by `branchsweep clean`.",
            candidates.total()
        );
    }

    Ok(())
}

fn category_header(category: Category, count: usize, stale_days: i64) -> String {
    let title = match category {
        Category::Merged => "Merged",
        Category::Stale => "Stale",
        Category::Gone => "Gone",
    };

    match category {
        Category::Stale if stale_days <= 0 => format!("{} (disabled):", title),
        Category::Stale => format!("{} ({}, older than {} days):", title, count, stale_days),
        _ => format!("{} ({}):", title, count),
    }
}

fn format_candidate(candidate: &CleanupCandidate, selection: &Selection) -> String {
    let marker = if selection.contains(candidate.name()) {
        '*'
    } else {
        ' '
    };
    let protection = candidate
        .protected_reason
        .as_ref()
        .map(|reason| format!("  [protected: {}]", reason))
        .unwrap_or_default();

    format!(
        "  {} {:<32} {:<8} {}{}",
        marker,
        candidate.name(),
        candidate.risk.to_string(),
        candidate.risk_reason,
        protection
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleanup::{Branch, RiskLevel};
    use crate::test_support::{DirGuard, create_test_repo, git};
    use serial_test::serial;

    fn candidate(name: &str, risk: RiskLevel, protected_reason: Option<&str>) -> CleanupCandidate {
        CleanupCandidate {
            branch: Branch {
                name: name.to_string(),
                shorthand: name.to_string(),
                is_head: false,
                is_remote: false,
                upstream: None,
                target_oid: "abc123".to_string(),
                ahead_behind: None,
                last_commit_timestamp: None,
                is_stale: false,
            },
            risk,
            risk_reason: "Fully merged into current branch".to_string(),
            is_protected: protected_reason.is_some(),
            protected_reason: protected_reason.map(str::to_string),
            tracking_info: None,
        }
    }

    #[test]
    fn test_format_marks_selected_candidates() {
        let done = candidate("feature/done", RiskLevel::Safe, None);
        let selection = default_selection(std::slice::from_ref(&done), &[]);

        let line = format_candidate(&done, &selection);
        assert!(line.starts_with("  * feature/done"));
        assert!(line.contains("safe"));
        assert!(line.ends_with("Fully merged into current branch"));
    }

    #[test]
    fn test_format_shows_protection_reason() {
        let release = candidate(
            "release/1.0",
            RiskLevel::Safe,
            Some("Protected by rule 'release/*'"),
        );
        let selection = default_selection(std::slice::from_ref(&release), &[]);

        let line = format_candidate(&release, &selection);
        assert!(line.starts_with("    release/1.0"));
        assert!(line.ends_with("[protected: Protected by rule 'release/*']"));
    }

    #[test]
    fn test_category_headers() {
        assert_eq!(category_header(Category::Merged, 2, 90), "Merged (2):");
        assert_eq!(
            category_header(Category::Stale, 1, 90),
            "Stale (1, older than 90 days):"
        );
        assert_eq!(category_header(Category::Stale, 0, 0), "Stale (disabled):");
        assert_eq!(category_header(Category::Gone, 0, -3), "Gone (0):");
    }

    #[test]
    #[serial]
    fn test_cmd_list_in_repo() {
        let temp_dir = create_test_repo();
        git(temp_dir.path(), &["branch", "feature/done"]);
        let _guard = DirGuard::new(temp_dir.path());

        for json in [false, true] {
            let args = ListArgs {
                category: None,
                stale_days: None,
                json,
            };
            cmd_list(args).unwrap();
        }

        let args = ListArgs {
            category: Some(Category::Gone),
            stale_days: Some(0),
            json: true,
        };
        cmd_list(args).unwrap();
    }

    #[test]
    fn test_run_list_rejects_invalid_config() {
        let temp_dir = create_test_repo();
        std::fs::write(
            temp_dir.path().join(".branchsweep.yaml"),
            "branch_rules:\n  - pattern: \"\"\n    prevent_deletion: true\n",
        )
        .unwrap();
        let ctx = RepoContext::resolve_from(temp_dir.path()).unwrap();

        let args = ListArgs {
            category: None,
            stale_days: None,
            json: false,
        };
        let err = run_list(&ctx, &args).unwrap_err();
        assert!(matches!(err, SweepError::InvalidInput(_)));
    }
}
