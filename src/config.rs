//! Engine configuration.
//!
//! Read once at startup from an optional TOML file; command-line flags
//! override individual fields afterwards.
//!
//! ```toml
//! depth = 3
//! mode = "ai"
//! log_level = "debug"
//! ```

use crate::error::Result;
use crate::game::GameMode;
use crate::types::{Depth, DEFAULT_DEPTH};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: i32,
    /// Mode new games start in
    pub mode: GameMode,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH.raw(),
            mode: GameMode::default(),
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load from a TOML file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Search depth, never below one ply.
    pub fn search_depth(&self) -> Depth {
        Depth::new(self.depth.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.search_depth(), Depth::new(2));
        assert_eq!(config.mode, GameMode::TwoPlayer);
    }

    #[test]
    fn test_partial_override() {
        let config = EngineConfig::from_toml("depth = 4\nmode = \"ai\"").unwrap();
        assert_eq!(config.search_depth(), Depth::new(4));
        assert_eq!(config.mode, GameMode::VsEngine);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_depth_clamped() {
        let config = EngineConfig::from_toml("depth = 0").unwrap();
        assert_eq!(config.search_depth(), Depth::ONE);
    }

    #[test]
    fn test_bad_toml() {
        let err = EngineConfig::from_toml("depth = \"deep\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load("/nonexistent/chessbot.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
