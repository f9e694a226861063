// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec configuration.
//!
//! Supports both programmatic and file-based (TOML) configuration:
//!
//! ```toml
//! max_depth = 32
//! max_input_len = 65536
//! wide_strings = "omit"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How the text codec treats UTF-16 / UTF-32 strings, which have no text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WideStringPolicy {
    /// Fail with `Unsupported`.
    #[default]
    Reject,
    /// Write nothing; read back an empty string without consuming input.
    Omit,
}

/// Marshaling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarshalConfig {
    /// Maximum combined object/sequence nesting accepted by the text reader.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Reject text inputs longer than this many bytes.
    #[serde(default)]
    pub max_input_len: Option<usize>,

    #[serde(default)]
    pub wide_strings: WideStringPolicy,
}

fn default_max_depth() -> usize {
    64
}

impl Default for MarshalConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_input_len: None,
            wide_strings: WideStringPolicy::default(),
        }
    }
}

impl MarshalConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        if self.max_input_len == Some(0) {
            return Err(ConfigError::Invalid(
                "max_input_len must be at least 1 when set".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = MarshalConfig::default();
        assert_eq!(config.max_depth, 64);
        assert_eq!(config.max_input_len, None);
        assert_eq!(config.wide_strings, WideStringPolicy::Reject);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = MarshalConfig::from_toml_str("wide_strings = \"omit\"").unwrap();
        assert_eq!(config.wide_strings, WideStringPolicy::Omit);
        assert_eq!(config.max_depth, 64);

        let config = MarshalConfig::from_toml_str("").unwrap();
        assert_eq!(config, MarshalConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            MarshalConfig::from_toml_str("max_depth = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            MarshalConfig::from_toml_str("max_input_len = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            MarshalConfig::from_toml_str("wide_strings = \"utf8\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_depth = 8").unwrap();
        writeln!(file, "max_input_len = 1024").unwrap();

        let config = MarshalConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.max_input_len, Some(1024));

        assert!(matches!(
            MarshalConfig::from_file("/nonexistent/marshal.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
