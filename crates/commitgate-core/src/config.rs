//! Configuration file loading for commitgate.
//!
//! Reads `.commitgate.json` (or an explicitly named file) and provides typed
//! access to the commit convention settings. Missing fields fall back to the
//! conventional-commit defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::GateError;

/// File looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".commitgate.json";

/// Top-level commitgate configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Allowed commit types, matched case-sensitively.
    #[serde(default = "default_types")]
    pub types: Vec<String>,
    /// Allowed scopes. Empty means any well-formed scope is accepted.
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Maximum subject length in characters. `0` disables the limit.
    #[serde(default = "default_max_header_length")]
    pub max_header_length: usize,
}

fn default_types() -> Vec<String> {
    [
        "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore",
        "revert",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

fn default_max_header_length() -> usize {
    100
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            types: default_types(),
            scopes: vec![],
            max_header_length: default_max_header_length(),
        }
    }
}

impl GateConfig {
    /// Load configuration from an explicitly named file.
    /// A missing or unparsable file is a configuration error.
    pub fn load(path: &Path) -> Result<Self, GateError> {
        let content = std::fs::read_to_string(path).map_err(|e| GateError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(path, &content)
    }

    /// Load `.commitgate.json` from `dir` if it exists, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self, GateError> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(dir = %dir.display(), "no {DEFAULT_CONFIG_FILE} found, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Replace the allowed type vocabulary, e.g. from `--types feat,fix`.
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types
            .into_iter()
            .map(|t| {
                let t: String = t.into();
                t.trim().to_string()
            })
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    pub fn is_allowed_type(&self, commit_type: &str) -> bool {
        self.types.iter().any(|t| t == commit_type)
    }

    /// Whether `scope` is acceptable. Every scope is allowed when no list is configured.
    pub fn is_allowed_scope(&self, scope: &str) -> bool {
        self.scopes.is_empty() || self.scopes.iter().any(|s| s == scope)
    }

    /// Reject configurations the gate cannot evaluate against.
    pub fn validate(&self) -> Result<(), String> {
        if self.types.is_empty() {
            return Err("`types` must list at least one commit type".to_string());
        }
        if let Some(bad) = self
            .types
            .iter()
            .find(|t| t.is_empty() || !t.chars().all(|c| c.is_ascii_alphabetic()))
        {
            return Err(format!("commit type '{bad}' must consist of ASCII letters only"));
        }
        Ok(())
    }

    fn parse(path: &Path, content: &str) -> Result<Self, GateError> {
        let config: Self = serde_json::from_str(content).map_err(|e| GateError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        config.validate().map_err(|reason| GateError::Config {
            path: path.display().to_string(),
            reason,
        })?;
        tracing::debug!(
            path = %path.display(),
            types = config.types.len(),
            scopes = config.scopes.len(),
            "loaded configuration"
        );
        Ok(config)
    }
}
