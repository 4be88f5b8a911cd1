//! Wildcard matching for branch protection rules.
//!
//! `*` is the only wildcard and matches any run of characters, `/` included.
//! Everything else matches literally.

use crate::error::{Result, SweepError};
use regex::Regex;

/// A compiled branch name pattern.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    regex: Regex,
}

impl GlobPattern {
    /// Compile a pattern.
    ///
    /// # Returns
    ///
    /// * `Ok(GlobPattern)` - The compiled pattern
    /// * `Err(SweepError::InvalidInput)` - Empty pattern or the regex could not be built
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(SweepError::InvalidInput(
                "branch rule pattern must not be empty".to_string(),
            ));
        }

        let regex = Regex::new(&glob_to_regex(pattern)).map_err(|e| {
            SweepError::InvalidInput(format!("invalid branch rule pattern '{}': {}", pattern, e))
        })?;

        Ok(Self { regex })
    }

    /// Returns true if `name` matches the whole pattern.
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Translate a wildcard pattern into an anchored regex source string.
fn glob_to_regex(pattern: &str) -> String {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    format!("^{}$", body)
}

/// Returns true if `name` matches `pattern`.
///
/// A pattern that cannot be compiled matches nothing.
pub fn matches(name: &str, pattern: &str) -> bool {
    GlobPattern::new(pattern)
        .map(|glob| glob.is_match(name))
        .unwrap_or(false)
}
