//! Global daymark configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DaymarkError, DaymarkResult};
use crate::event::DEFAULT_COLOR;

static DEFAULT_DATA_DIR: &str = "~/.local/share/daymark";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Configuration at ~/.config/daymark/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DaymarkConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Color given to new events when none is chosen.
    #[serde(default = "default_color")]
    pub default_color: String,
}

impl Default for DaymarkConfig {
    fn default() -> Self {
        DaymarkConfig {
            data_dir: default_data_dir(),
            default_color: default_color(),
        }
    }
}

impl DaymarkConfig {
    pub fn config_path() -> DaymarkResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DaymarkError::Config("Could not determine config directory".into()))?
            .join("daymark");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template first
    /// if the file does not exist yet.
    pub fn load() -> DaymarkResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            Self::create_default_config(&path)?;
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> DaymarkResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DaymarkError::Config(format!("Could not read {}: {e}", path.display())))?;

        toml::from_str(&content)
            .map_err(|e| DaymarkError::Config(format!("Could not parse {}: {e}", path.display())))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DaymarkResult<()> {
        let contents = format!(
            "\
# daymark configuration

# Where your events are stored:
# data_dir = \"{}\"

# Color for new events when none is given:
# default_color = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_COLOR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DaymarkError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DaymarkError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daymark").join("config.toml");

        DaymarkConfig::create_default_config(&path).unwrap();
        let config = DaymarkConfig::load_from(&path).unwrap();

        assert_eq!(config, DaymarkConfig::default());
    }

    #[test]
    fn test_load_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/tmp/notes\"\ndefault_color = \"#ff8800\"\n").unwrap();

        let config = DaymarkConfig::load_from(&path).unwrap();

        assert_eq!(config.data_path(), PathBuf::from("/tmp/notes"));
        assert_eq!(config.default_color, "#ff8800");
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = [").unwrap();

        assert!(matches!(
            DaymarkConfig::load_from(&path),
            Err(DaymarkError::Config(_))
        ));
    }

    #[test]
    fn test_data_path_expands_tilde() {
        let config = DaymarkConfig::default();
        assert!(!config.data_path().to_string_lossy().starts_with('~'));
    }
}
