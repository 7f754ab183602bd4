//! Generator configuration
//!
//! The generator reads no global state: every run receives a
//! [`GeneratorConfig`] value that is threaded through the walk and all
//! descriptor builders. The CLI assembles it from an optional TOML file
//! (`gnmi-client-gen.toml`, auto-detected next to the schema) and flag
//! overrides.
//!
//! ```toml
//! operations = ["get"]
//! strict = false
//! debug = false
//! ```

use crate::generator::OperationSet;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up next to the schema when no config path is given
pub const CONFIG_FILE_NAME: &str = "gnmi-client-gen.toml";

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Operations to emit descriptors for (default: get, update, delete)
    pub operations: OperationSet,
    /// Fail on node kinds without a descriptor builder instead of skipping them
    pub strict: bool,
    /// Log every generated descriptor at debug level
    pub debug: bool,
}

impl GeneratorConfig {
    /// Replace the operation set
    pub fn with_operations(mut self, operations: OperationSet) -> Self {
        self.operations = operations;
        self
    }

    /// Escalate unknown node kinds to errors
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Load a generator configuration from a TOML file
///
/// # Returns
///
/// `Ok(None)` if the file does not exist, `Err` if it exists but cannot be
/// read or parsed.
pub fn load_config(config_path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read generator config: {}", config_path.display()))?;

    let config: GeneratorConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse generator config: {}", config_path.display()))?;

    Ok(Some(config))
}

/// Resolve the config file to use
///
/// Priority:
/// 1. Explicitly provided path (via CLI), if it exists
/// 2. `gnmi-client-gen.toml` alongside the schema file
/// 3. None (defaults)
pub fn resolve_config_path(explicit_path: Option<&Path>, schema_path: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let candidate = schema_path.parent()?.join(CONFIG_FILE_NAME);
    if candidate.exists() {
        Some(candidate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::generator::Operation;
    use std::fs;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(&dir.path().join("absent.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_operations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "operations = [\"update\", \"get\"]\nstrict = true\n").unwrap();

        let config = load_config(&path).unwrap().expect("config present");
        let ops: Vec<_> = config.operations.iter().collect();
        assert_eq!(ops, vec![Operation::Get, Operation::Update]);
        assert!(config.strict);
        assert!(!config.debug);
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "").unwrap();

        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_empty_operations_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "operations = []\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("at least one operation"), "{err:#}");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "methods = [\"get\"]\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_resolve_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("model.yaml");
        assert!(resolve_config_path(None, &schema).is_none());

        let detected = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&detected, "").unwrap();
        assert_eq!(resolve_config_path(None, &schema), Some(detected.clone()));

        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "").unwrap();
        assert_eq!(
            resolve_config_path(Some(&explicit), &schema),
            Some(explicit.clone())
        );
        assert_eq!(
            resolve_config_path(Some(&dir.path().join("nope.toml")), &schema),
            Some(detected)
        );
    }
}
