//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::cleanup::{BranchRule, GlobPattern};
use crate::error::{Result, SweepError};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SweepError::UserError)` - The file could not be read
    /// * `Err(SweepError::InvalidInput)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SweepError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if the file exists, otherwise return defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SweepError::InvalidInput(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SweepError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - every `branch_rules` pattern must compile (non-empty)
    /// - `remote`, when set, must be non-empty
    ///
    /// A negative `stale_branch_days` is accepted and treated as disabled.
    pub fn validate(&self) -> Result<()> {
        for rule in &self.branch_rules {
            if let Err(SweepError::InvalidInput(msg)) = GlobPattern::new(&rule.pattern) {
                return Err(SweepError::InvalidInput(format!(
                    "config validation failed: {}",
                    msg
                )));
            }
        }

        if let Some(remote) = &self.remote
            && remote.trim().is_empty()
        {
            return Err(SweepError::InvalidInput(
                "config validation failed: remote must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The rules that prevent deletion; other rules carry no weight here.
    pub fn protection_rules(&self) -> Vec<BranchRule> {
        self.branch_rules
            .iter()
            .filter(|rule| rule.prevent_deletion)
            .cloned()
            .collect()
    }
}
