use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to parse config: {source}")]
    InvalidJson { source: serde_json::Error },
}

/// Controls which delimiters the inline pipeline splits on, in order, and the
/// element the resulting nodes are wrapped in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineConfig {
    pub delimiters: Vec<String>,
    pub wrapper_tag: String,
}

impl Default for InlineConfig {
    fn default() -> Self {
        InlineConfig {
            // Code first so markers inside code spans survive the later passes.
            delimiters: vec![
                "`".to_string(),
                "**".to_string(),
                "*".to_string(),
                "_".to_string(),
            ],
            wrapper_tag: "p".to_string(),
        }
    }
}

impl InlineConfig {
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::InvalidJson { source })
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();
        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = InlineConfig::from_json_str(r#"{"wrapper_tag": "span"}"#).unwrap();
        assert_eq!(config.wrapper_tag, "span");
        assert_eq!(config.delimiters, InlineConfig::default().delimiters);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let original = InlineConfig {
            delimiters: vec!["_".to_string()],
            wrapper_tag: "div".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(InlineConfig::from_json_str(&json).unwrap(), original);
    }

    #[test]
    fn test_parse_error() {
        let err = InlineConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = InlineConfig::load_from_path("/nonexistent/inline-html/config.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/inline-html/config.json"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("inline.json");
        fs::write(&config_path, r#"{"delimiters": "`"}"#).unwrap();

        let err = InlineConfig::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains(&config_path.display().to_string()));
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("inline.json");
        fs::write(&config_path, r#"{"delimiters": ["_"], "wrapper_tag": "div"}"#).unwrap();

        let config = InlineConfig::load_from_path(&config_path).unwrap();
        assert_eq!(config.delimiters, vec!["_".to_string()]);
        assert_eq!(config.wrapper_tag, "div");
    }
}
