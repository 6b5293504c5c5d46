//! Engine configuration loaded from TOML.
//!
//! ```toml
//! level = "medium"
//! time_limit_ms = 2000
//! max_depth = 5
//!
//! [weights]
//! piece_square = 30
//! mobility = 10
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eval::EvalWeights;
use crate::level::EngineLevel;

/// Deepest search a config may ask for.
pub const MAX_CONFIG_DEPTH: u8 = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("max_depth {0} out of range 1..=32")]
    InvalidDepth(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub level: EngineLevel,
    /// Per-move budget; 0 means no limit.
    pub time_limit_ms: u64,
    /// Overrides the tier's depth.
    pub max_depth: Option<u8>,
    pub weights: EvalWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            level: EngineLevel::default(),
            time_limit_ms: 5000,
            max_depth: None,
            weights: EvalWeights::default(),
        }
    }
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        if let Some(d) = config.max_depth {
            if d == 0 || d > MAX_CONFIG_DEPTH {
                return Err(ConfigError::InvalidDepth(d));
            }
        }
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn time_limit(&self) -> Option<Duration> {
        (self.time_limit_ms > 0).then(|| Duration::from_millis(self.time_limit_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.time_limit(), Some(Duration::from_millis(5000)));
    }

    #[test]
    fn test_partial_config() {
        let config = EngineConfig::from_toml_str(
            r#"
            level = "hard"
            time_limit_ms = 0
            max_depth = 3

            [weights]
            mobility = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.level, EngineLevel::Hard);
        assert_eq!(config.time_limit(), None);
        assert_eq!(config.max_depth, Some(3));
        assert_eq!(config.weights.mobility, 25);
        assert_eq!(config.weights.piece_square, 30);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let err = EngineConfig::from_toml_str(r#"level = "grandmaster""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_depth_out_of_range() {
        let err = EngineConfig::from_toml_str("max_depth = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDepth(0)));
        let err = EngineConfig::from_toml_str("max_depth = 99").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDepth(99)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = EngineConfig {
            level: EngineLevel::Expert,
            time_limit_ms: 750,
            max_depth: Some(4),
            weights: EvalWeights {
                king_safety: 40,
                ..EvalWeights::default()
            },
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EngineConfig::load("/nonexistent/engine.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("engine.toml"));
    }
}
