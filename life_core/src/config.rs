// config.rs - Simulation settings

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::clock::interval_for;
use crate::error::{LifeError, Result};

/// Construction-time settings. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Cells per side.
    pub size: usize,
    /// Target generations per second.
    pub fps: f64,
    /// Tint dead cells by how long they were alive.
    pub crazy_colors: bool,
    /// File used by the JSON pattern store.
    pub patterns_path: PathBuf,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            size: 20,
            fps: 30.0,
            crazy_colors: false,
            patterns_path: PathBuf::from("game_of_life_patterns.json"),
        }
    }
}

impl LifeConfig {
    pub fn new(size: usize, fps: f64) -> Self {
        Self { size, fps, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(LifeError::InvalidConfiguration("size must be positive".to_string()));
        }
        interval_for(self.fps)?;
        Ok(())
    }

    /// Reads and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let config: Self = serde_json::from_slice(&bytes).map_err(|e| {
            LifeError::InvalidConfiguration(format!("{}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LifeConfig::default();
        assert_eq!(config.size, 20);
        assert_eq!(config.fps, 30.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_size_and_bad_fps_are_rejected() {
        assert!(LifeConfig::new(0, 30.0).validate().is_err());
        assert!(LifeConfig::new(10, 0.0).validate().is_err());
        assert!(LifeConfig::new(10, -1.0).validate().is_err());
    }

    #[test]
    fn extreme_rates_are_rejected() {
        assert!(matches!(
            LifeConfig::new(5, 1e10).validate(),
            Err(LifeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            LifeConfig::new(5, 1e-300).validate(),
            Err(LifeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: LifeConfig = serde_json::from_str(r#"{"size": 64}"#).unwrap();
        assert_eq!(config.size, 64);
        assert_eq!(config.fps, 30.0);
        assert!(!config.crazy_colors);
    }

    #[test]
    fn config_file_is_validated() {
        let path = std::env::temp_dir().join(format!("life_core_config_{}.json", std::process::id()));
        fs::write(&path, r#"{"size": 0}"#).unwrap();
        assert!(matches!(
            LifeConfig::from_json_file(&path),
            Err(LifeError::InvalidConfiguration(_))
        ));
        fs::write(&path, r#"{"size": 8, "fps": 12.5, "crazy_colors": true}"#).unwrap();
        let config = LifeConfig::from_json_file(&path).unwrap();
        assert_eq!(config.size, 8);
        assert!(config.crazy_colors);
        fs::remove_file(&path).unwrap();
    }
}
