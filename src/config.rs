use crate::error::{Result, SeminarError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "seminar-desk";

/// The filename for the configuration file.
const CONFIG_FILENAME: &str = "config.toml";

/// Log levels accepted in `log_level`.
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "off"];

// ============================================================================
// Configuration
// ============================================================================

/// User preferences loaded from `~/.config/seminar-desk/config.toml`.
///
/// Missing fields fall back to their defaults, so partial files work.
///
/// # Example
///
/// ```toml
/// data_file = "/home/me/seminar.json"
/// log_level = "info"
///
/// [window]
/// width = 960.0
/// height = 640.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Seminar data file. The built-in sample schedule is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Default tracing directive. `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub window: WindowConfig,
}

/// Initial size of the GUI window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_width() -> f32 {
    960.0
}

fn default_height() -> f32 {
    640.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            log_level: default_log_level(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Config {
    /// Override the data file, e.g. from `--data`.
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if data_file.is_some() {
            self.data_file = data_file;
        }
        self
    }
}

// ============================================================================
// Config Validation
// ============================================================================

/// Check a loaded configuration for values the app cannot use.
pub fn validate_config(config: &Config) -> Result<()> {
    let level = config.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(SeminarError::Config(format!(
            "Unknown log_level {:?}, expected one of: {}",
            config.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    let window = config.window;
    if !(window.width > 0.0 && window.height > 0.0) {
        return Err(SeminarError::Config(format!(
            "Window size must be positive, got {}x{}",
            window.width, window.height
        )));
    }

    Ok(())
}

// ============================================================================
// Config File Management
// ============================================================================

/// Written when creating a new config file.
const DEFAULT_CONFIG_WITH_COMMENTS: &str = r#"# Seminar Desk Configuration

# Seminar data file (JSON with "sessions" and "users").
# Leave unset to browse the built-in sample schedule.
# data_file = "/path/to/seminar.json"

# Log level: error, warn, info, debug, trace, or off.
# RUST_LOG overrides this when set.
log_level = "info"

# Initial GUI window size in pixels.
[window]
width = 960.0
height = 640.0
"#;

/// Get the config directory path (~/.config/seminar-desk/).
///
/// Does not create the directory.
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SeminarError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Path to `~/.config/seminar-desk/config.toml`.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

/// Load the configuration from `~/.config/seminar-desk/config.toml`,
/// creating it with commented defaults if it does not exist.
pub fn load_config() -> Result<Config> {
    load_config_at(&config_path()?)
}

/// Load the configuration at `path`, creating it with commented defaults if
/// it does not exist.
pub fn load_config_at(path: &Path) -> Result<Config> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG_WITH_COMMENTS)?;
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        SeminarError::Config(format!("Failed to parse config file at {:?}: {}", path, e))
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Write `config` to `path`. Overwrites comments in an existing file.
pub fn save_config_at(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)
        .map_err(|e| SeminarError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_dir_ends_with_app_name() {
        let dir = config_dir().unwrap();
        assert!(dir.ends_with(".config/seminar-desk"));
    }

    #[test]
    fn test_load_creates_commented_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let config = load_config_at(&path).unwrap();
        assert_eq!(config, Config::default());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Seminar Desk Configuration"));
        // The commented default must parse back to the same values.
        assert_eq!(load_config_at(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "log_level = \"debug\"\n[window]\nwidth = 1200.0\n").unwrap();

        let config = load_config_at(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.window.width, 1200.0);
        assert_eq!(config.window.height, 640.0);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "log_level = [").unwrap();

        let err = load_config_at(&path).unwrap_err();
        assert!(matches!(err, SeminarError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_unknown_level_and_bad_size() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            window: WindowConfig {
                width: 0.0,
                height: 480.0,
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            log_level: "WARN".to_string(),
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_save_and_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let config = Config {
            data_file: Some(PathBuf::from("/tmp/seminar.json")),
            ..Default::default()
        };

        save_config_at(&config, &path).unwrap();
        assert_eq!(load_config_at(&path).unwrap(), config);
    }

    #[test]
    fn test_cli_data_file_overrides() {
        let config = Config {
            data_file: Some(PathBuf::from("a.json")),
            ..Default::default()
        };
        let kept = config.clone().with_data_file(None);
        assert_eq!(kept.data_file, Some(PathBuf::from("a.json")));
        let replaced = config.with_data_file(Some(PathBuf::from("b.json")));
        assert_eq!(replaced.data_file, Some(PathBuf::from("b.json")));
    }
}
