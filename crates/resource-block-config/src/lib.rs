use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Tool defaults for the demo host: placeholder overrides, read-only mode,
/// and an optional stylesheet replacing the bundled one.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub title_placeholder: Option<String>,
    #[serde(default)]
    pub message_placeholder: Option<String>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub stylesheet: Option<PathBuf>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the configured stylesheet path
        if let Some(stylesheet) = config.stylesheet.take() {
            config.stylesheet = Some(Self::expand_path(&stylesheet).unwrap_or(stylesheet));
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/resource-block");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/resource-block/config.toml"));
    }

    #[test]
    fn test_missing_config_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_empty_config_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert!(config.title_placeholder.is_none());
        assert!(config.message_placeholder.is_none());
        assert!(!config.read_only);
        assert!(config.stylesheet.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let test_config = Config {
            title_placeholder: Some("Name it".to_string()),
            message_placeholder: Some("Describe it".to_string()),
            read_only: true,
            stylesheet: None,
        };

        test_config.save_to_path(&config_file).unwrap();

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded.title_placeholder, test_config.title_placeholder);
        assert_eq!(loaded.message_placeholder, test_config.message_placeholder);
        assert_eq!(loaded.read_only, test_config.read_only);
    }

    #[test]
    fn test_parse_error_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "read_only = \"not a bool\"").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        match err {
            ConfigError::Parse { config_path, .. } => assert_eq!(config_path, config_file),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_stylesheet_with_tilde_in_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "stylesheet = \"~/themes/resource.css\"").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        let stylesheet = config.stylesheet.unwrap();
        assert!(!stylesheet.to_string_lossy().starts_with('~'));
        assert!(stylesheet.to_string_lossy().contains("themes/resource.css"));
    }

    #[test]
    fn test_stylesheet_with_env_var_in_toml() {
        unsafe {
            env::set_var("RESOURCE_THEME_ROOT", "/custom/themes");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "stylesheet = \"$RESOURCE_THEME_ROOT/resource.css\"",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(
            config.stylesheet.unwrap(),
            PathBuf::from("/custom/themes/resource.css")
        );

        unsafe {
            env::remove_var("RESOURCE_THEME_ROOT");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path.css");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }
}
