//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{IidError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::path::Path;

/// Name of the config file looked up in the repository root.
pub const CONFIG_FILE_NAME: &str = ".iidcheck.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(IidError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            IidError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, `<repo_root>/.iidcheck.yaml`
    /// is used when present, and defaults otherwise.
    pub fn discover(explicit: Option<&Path>, repo_root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = repo_root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            return Self::load(candidate);
        }

        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| IidError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| IidError::ConfigError(format!("failed to serialize config: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - descriptor tokens must be non-empty, free of whitespace and commas, and unique
    /// - `exclude_paths` entries must be valid glob patterns
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for desc in &self.descriptors {
            let token = desc.token.as_str();
            if token.is_empty() {
                return Err(IidError::ConfigError(
                    "descriptor tokens must be non-empty".to_string(),
                ));
            }
            if token.contains(|c: char| c.is_whitespace() || c == ',' || c == ']') {
                return Err(IidError::ConfigError(format!(
                    "descriptor token '{}' must not contain whitespace, ',' or ']'",
                    token
                )));
            }
            if !seen.insert(token) {
                return Err(IidError::ConfigError(format!(
                    "descriptor token '{}' is listed more than once",
                    token
                )));
            }
        }

        self.exclude_set()?;
        Ok(())
    }

    /// Compile `exclude_paths` into a matcher.
    pub fn exclude_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude_paths {
            let glob = Glob::new(pattern).map_err(|e| {
                IidError::ConfigError(format!(
                    "invalid glob in exclude_paths: '{}' - {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }
        builder
            .build()
            .map_err(|e| IidError::ConfigError(format!("failed to build exclude_paths: {}", e)))
    }
}
