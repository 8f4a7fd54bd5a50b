use super::{Rule, Severity};
use crate::error::{OasError, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Bundled default rule configuration; an external file can replace it.
const DEFAULT_RULES: &str = include_str!("../../config/validation-rules.json");

/// Externally configured severity and message for one rule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuleConfig {
    pub severity: Severity,
    pub message: String,
}

/// Rule identifier -> configuration, loaded once at startup and
/// read-only afterwards. Passed by reference into the rule engine.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: IndexMap<Rule, RuleConfig>,
}

impl RuleTable {
    /// Loads the bundled default rule table.
    pub fn bundled() -> Result<Self> {
        Self::from_json(DEFAULT_RULES, "bundled configuration")
    }

    /// Loads a rule table from an external JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        tracing::info!("Starting to load validation rules from [{}]", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|err| OasError::RuleConfig(format!("{}: {}", path.display(), err)))?;
        Self::from_json(&content, &path.display().to_string())
    }

    fn from_json(content: &str, origin: &str) -> Result<Self> {
        let rules: IndexMap<Rule, RuleConfig> = serde_json::from_str(content)
            .map_err(|err| OasError::RuleConfig(format!("{}: {}", origin, err)))?;
        tracing::info!("[{}] validation rules has been loaded from [{}]", rules.len(), origin);
        Ok(Self { rules })
    }

    /// A rule the engine references but the configuration does not carry
    /// is a deployment defect, not a per-document validation failure.
    pub fn get(&self, rule: Rule) -> Result<&RuleConfig> {
        self.rules
            .get(&rule)
            .ok_or_else(|| OasError::RuleNotFound(rule.as_str().to_string()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
