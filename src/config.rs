//! Configuration module for ninja-nutrition
//!
//! Settings live in `config.toml` under the user's config directory and can be
//! overridden by `NINJA_*` environment variables.

use crate::NinjaError;
use crate::category::Category;
use crate::icons::IconStyle;
use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by `config get` and `config set`
pub const KEYS: [&str; 7] = [
    "catalog_path",
    "default_category",
    "quiet",
    "mouse",
    "icons",
    "log_level",
    "log_file",
];

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NinjaConfig {
    /// Recipe catalog file; the built-in sample is used when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Category the page opens with
    #[serde(default)]
    pub default_category: Category,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Capture mouse input in the TUI
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Icon set for the TUI
    #[serde(default)]
    pub icons: IconStyle,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Write logs to this file instead of stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for NinjaConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_category: Category::All,
            quiet: false,
            mouse: true,
            icons: IconStyle::default(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, NinjaError> {
    value
        .parse()
        .map_err(|_| NinjaError::InvalidInput(format!("{key} expects true or false, got '{value}'")))
}

fn optional_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

fn path_string(path: Option<&PathBuf>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

impl NinjaConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("ninja-nutrition").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an environment override cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, then apply `NINJA_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an environment override cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading config");

        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("NINJA").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Read a single setting as text
    ///
    /// # Errors
    ///
    /// Returns `NinjaError::InvalidInput` for unknown keys.
    pub fn get(&self, key: &str) -> Result<String, NinjaError> {
        let value = match key {
            "catalog_path" => path_string(self.catalog_path.as_ref()),
            "default_category" => self.default_category.key().to_string(),
            "quiet" => self.quiet.to_string(),
            "mouse" => self.mouse.to_string(),
            "icons" => self.icons.key().to_string(),
            "log_level" => self.log_level.clone(),
            "log_file" => path_string(self.log_file.as_ref()),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Change a single setting from text
    ///
    /// An empty value clears optional paths.
    ///
    /// # Errors
    ///
    /// Returns `NinjaError::InvalidInput` for unknown keys or malformed values.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), NinjaError> {
        let value = value.trim();
        match key {
            "catalog_path" => self.catalog_path = optional_path(value),
            "default_category" => self.default_category = value.parse()?,
            "quiet" => self.quiet = parse_bool(key, value)?,
            "mouse" => self.mouse = parse_bool(key, value)?,
            "icons" => {
                self.icons = IconStyle::from_str(value, true).map_err(|_| {
                    NinjaError::InvalidInput(format!("icons expects emoji or ascii, got '{value}'"))
                })?;
            }
            "log_level" => {
                if value.is_empty() {
                    return Err(NinjaError::InvalidInput("log_level cannot be empty".into()));
                }
                self.log_level = value.to_string();
            }
            "log_file" => self.log_file = optional_path(value),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Apply a `KEY=VALUE` assignment
    ///
    /// # Errors
    ///
    /// Returns `NinjaError::InvalidInput` if the setting is not in `KEY=VALUE` form
    /// or [`set`](Self::set) rejects it.
    pub fn apply_setting(&mut self, setting: &str) -> Result<(String, String), NinjaError> {
        let (key, value) = setting.split_once('=').ok_or_else(|| {
            NinjaError::InvalidInput(format!("Expected KEY=VALUE, got '{setting}'"))
        })?;
        let key = key.trim();
        self.set(key, value)?;
        Ok((key.to_string(), self.get(key)?))
    }
}

fn unknown_key(key: &str) -> NinjaError {
    NinjaError::InvalidInput(format!(
        "Unknown config key '{key}' (known keys: {})",
        KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NinjaConfig::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.default_category, Category::All);
        assert!(!config.quiet);
        assert!(config.mouse);
        assert_eq!(config.icons, IconStyle::Emoji);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = NinjaConfig::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.default_category, NinjaConfig::default().default_category);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "default_category = \"Обед\"\nicons = \"ascii\"\n").unwrap();

        let config = NinjaConfig::load_from(&path).unwrap();
        assert_eq!(config.default_category, Category::Lunch);
        assert_eq!(config.icons, IconStyle::Ascii);
        assert!(config.mouse);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = NinjaConfig::default();
        config.catalog_path = Some(PathBuf::from("/tmp/recipes.json"));
        config.default_category = Category::Snack;
        config.mouse = false;
        config.save_to(&path).unwrap();

        let loaded = NinjaConfig::load_from(&path).unwrap();
        assert_eq!(loaded.catalog_path, config.catalog_path);
        assert_eq!(loaded.default_category, Category::Snack);
        assert!(!loaded.mouse);
    }

    #[test]
    fn test_get_and_set_known_keys() {
        let mut config = NinjaConfig::default();

        config.set("quiet", "true").unwrap();
        assert_eq!(config.get("quiet").unwrap(), "true");

        config.set("default_category", "Ужин").unwrap();
        assert_eq!(config.get("default_category").unwrap(), "dinner");

        config.set("icons", "ASCII").unwrap();
        assert_eq!(config.get("icons").unwrap(), "ascii");

        config.set("catalog_path", "/tmp/c.toml").unwrap();
        assert_eq!(config.get("catalog_path").unwrap(), "/tmp/c.toml");
        config.set("catalog_path", "").unwrap();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.get("catalog_path").unwrap(), "");
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = NinjaConfig::default();
        assert!(matches!(
            config.set("databases", "x"),
            Err(NinjaError::InvalidInput(_))
        ));
        assert!(matches!(
            config.set("mouse", "sometimes"),
            Err(NinjaError::InvalidInput(_))
        ));
        assert!(matches!(
            config.set("default_category", "Полдник"),
            Err(NinjaError::CategoryError(_))
        ));
        assert!(config.get("nope").is_err());
        assert_eq!(config, NinjaConfig::default());
    }

    #[test]
    fn test_apply_setting() {
        let mut config = NinjaConfig::default();
        let (key, value) = config.apply_setting("log_level = debug").unwrap();
        assert_eq!(key, "log_level");
        assert_eq!(value, "debug");
        assert!(config.apply_setting("log_level").is_err());
    }
}
