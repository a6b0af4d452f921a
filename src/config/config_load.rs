// src/config/config_load.rs
//
// loading config.toml, which tells the library where the puzzle input
// corpus lives:
//
//   [paths]
//   input_directory = "inputs"

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config.toml next to the executable or in the working directory")]
    NotFound,

    #[error("failed to read config.toml: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub paths: PathConfig,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub input_directory: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, ConfigError> {
        if !Path::new("config.toml").exists() {
            return Err(ConfigError::NotFound);
        }
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }

    /// Parse a config from a TOML string, for callers that manage their
    /// own files.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn resolve_input_dir(&self) -> PathBuf {
        if Path::new(&self.paths.input_directory).is_absolute() {
            PathBuf::from(&self.paths.input_directory)
        } else {
            // If path is relative, resolve it relative to the executable or working directory
            if let Some(exe_dir) = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            {
                exe_dir.join(&self.paths.input_directory)
            } else {
                PathBuf::from(&self.paths.input_directory)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml() {
        let config = Config::from_toml(
            r#"
            [paths]
            input_directory = "inputs"
            "#,
        )
        .unwrap();
        assert_eq!(config.paths.input_directory, "inputs");
    }

    #[test]
    fn test_from_toml_rejects_missing_section() {
        assert!(Config::from_toml("").is_err());
        assert!(Config::from_toml("[paths]").is_err());
    }

    #[test]
    fn test_resolve_absolute_input_dir() {
        let config = Config {
            paths: PathConfig {
                input_directory: "/data/inputs".to_string(),
            },
        };
        assert_eq!(config.resolve_input_dir(), PathBuf::from("/data/inputs"));
    }
}
