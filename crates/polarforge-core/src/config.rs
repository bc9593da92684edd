//! # Configuration
//!
//! YAML configuration for polarforge tools: logging setup and a list of
//! design requests to evaluate.
//!
//! ## Configuration Search Path
//!
//! Configuration is loaded from the first file found:
//! 1. Path specified via `POLARFORGE_CONFIG` environment variable
//! 2. `./polarforge.yaml` (current directory)
//! 3. `~/.config/polarforge/config.yaml` (user config)
//! 4. `/etc/polarforge/config.yaml` (system config)
//!
//! ## Example Configuration
//!
//! ```yaml
//! logging:
//!   level: debug
//!   format: pretty
//!
//! designs:
//!   - family: polar5g
//!     k: 16
//!     n: 32
//!   - family: reed_muller
//!     r: 2
//!     m: 4
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::batch::DesignRequest;
use crate::observe::LogConfig;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "POLARFORGE_CONFIG";

/// Error type for configuration operations.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration file not found
    NotFound(String),
    /// Failed to read or write configuration file
    ReadError(String),
    /// Failed to parse configuration
    ParseError(String),
    /// Invalid configuration value
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(msg) => write!(f, "config not found: {}", msg),
            ConfigError::ReadError(msg) => write!(f, "failed to read config: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "failed to parse config: {}", msg),
            ConfigError::ValidationError(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Logging configuration
    pub logging: LogConfig,
    /// Designs to construct, in order
    pub designs: Vec<DesignRequest>,
}

impl ForgeConfig {
    /// Load configuration from the standard search path.
    ///
    /// An explicit `POLARFORGE_CONFIG` that does not exist is an error;
    /// otherwise the first existing file wins and defaults are returned if
    /// there is none.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(ConfigError::NotFound(format!(
                    "{} = {}",
                    CONFIG_ENV_VAR,
                    path.display()
                )));
            }
            return Self::load_from(&path);
        }

        for path in Self::config_search_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;

        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), designs = config.designs.len(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))
    }

    /// Get configuration search paths.
    pub fn config_search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("./polarforge.yaml")];

        if let Some(dirs) = directories::ProjectDirs::from("", "", "polarforge") {
            paths.push(dirs.config_dir().join("config.yaml"));
        }

        paths.push(PathBuf::from("/etc/polarforge/config.yaml"));

        paths
    }

    /// Validate the configuration.
    ///
    /// Every design request is checked by running it; constructions are
    /// cheap enough that this is the simplest exact check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref filter) = self.logging.filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "logging.filter must not be empty".to_string(),
                ));
            }
        }

        for (i, request) in self.designs.iter().enumerate() {
            if let Err(e) = request.build() {
                return Err(ConfigError::ValidationError(format!(
                    "designs[{}] {}: {}",
                    i,
                    request.label(),
                    e
                )));
            }
        }

        Ok(())
    }

    /// Generate example configuration YAML.
    pub fn example_yaml() -> String {
        let config = Self {
            logging: LogConfig::default(),
            designs: vec![
                DesignRequest::Polar5g {
                    k: 16,
                    n: 32,
                    order: Default::default(),
                },
                DesignRequest::ReedMuller { r: 2, m: 4 },
            ],
        };
        serde_yaml::to_string(&config).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::{LogFormat, LogLevel};
    use crate::types::PositionOrder;

    #[test]
    fn test_default_config() {
        let config = ForgeConfig::default();
        assert!(config.designs.is_empty());
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
logging:
  level: debug
  format: json

designs:
  - family: polar5g
    k: 100
    n: 256
    order: reliability
  - family: reed_muller
    r: 0
    m: 5
"#;

        let config = ForgeConfig::parse(yaml).unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.designs.len(), 2);
        assert_eq!(
            config.designs[0],
            DesignRequest::Polar5g {
                k: 100,
                n: 256,
                order: PositionOrder::Reliability
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let config = ForgeConfig::parse("logging:\n  level: warn\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Warn);
        // Defaults should be applied
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(config.designs.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = ForgeConfig::parse("designs:\n  - family: turbo\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation() {
        let mut config = ForgeConfig::default();
        config.designs.push(DesignRequest::Polar5g {
            k: 10,
            n: 31,
            order: PositionOrder::Ascending,
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("designs[0]"));

        config.designs.clear();
        config.logging.filter = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("polarforge.yaml");

        let config = ForgeConfig::parse(&ForgeConfig::example_yaml()).unwrap();
        config.save(&path).unwrap();
        let loaded = ForgeConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.designs.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ForgeConfig::load_from(Path::new("/nonexistent/polarforge.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[test]
    fn test_config_search_paths() {
        let paths = ForgeConfig::config_search_paths();
        assert!(!paths.is_empty());
        assert!(paths[0].ends_with("polarforge.yaml"));
    }
}
