//! Configuration module for `DegreePlanner`

use crate::core::scheduler::Season;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Compiled-in default configuration.
const CONFIG_DEFAULTS: &str = r#"
[logging]
level = "warn"
file = ""
verbose = false

[planning]
capacity = 4
start_season = "Fall"

[paths]
out_dir = "$DEGREE_PLANNER/plans"
"#;

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Planning defaults used when CLI flags are omitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Maximum courses per planned semester
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    /// Season the first planned semester falls in ("Fall" or "Spring")
    #[serde(default)]
    pub start_season: String,
}

const fn default_capacity() -> u32 {
    4
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            start_season: String::new(),
        }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for exported plan JSON files
    #[serde(default)]
    pub out_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Planning defaults
    #[serde(default)]
    pub planning: PlanningConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override default courses-per-semester capacity
    pub capacity: Option<u32>,
    /// Override default start season
    pub start_season: Option<String>,
    /// Override plan output directory
    pub out_dir: Option<String>,
}

impl Config {
    /// Get the `$DEGREE_PLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/degreeplanner`
    /// - macOS: `~/Library/Application Support/degreeplanner`
    /// - Windows: `%APPDATA%\degreeplanner`
    #[must_use]
    pub fn get_degreeplanner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("degreeplanner")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used on load so that config files written by older versions pick up
    /// newly added fields. Only fields that are empty in the current config
    /// and non-empty in defaults are updated.
    ///
    /// # Returns
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.planning.start_season.is_empty() && !defaults.planning.start_season.is_empty() {
            self.planning
                .start_season
                .clone_from(&defaults.planning.start_season);
            changed = true;
        }

        if self.paths.out_dir.is_empty() && !defaults.paths.out_dir.is_empty() {
            self.paths.out_dir.clone_from(&defaults.paths.out_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// This allows command-line arguments to override configuration file values
    /// without modifying the persistent configuration file. Only non-`None` values
    /// in the overrides struct will replace config values.
    ///
    /// # Arguments
    ///
    /// * `overrides` - A `ConfigOverrides` struct with optional override values
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(capacity) = overrides.capacity {
            self.planning.capacity = capacity;
        }
        if let Some(season) = &overrides.start_season {
            self.planning.start_season.clone_from(season);
        }

        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir.clone_from(out_dir);
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_degreeplanner_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$DEGREE_PLANNER` variable in a string
    ///
    /// Replaces occurrences of `$DEGREE_PLANNER` with the actual degreeplanner
    /// directory path so config values can reference the config directory.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$DEGREE_PLANNER") {
            let planner_dir = Self::get_degreeplanner_dir();
            value.replace("$DEGREE_PLANNER", planner_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$DEGREE_PLANNER`
    /// variables in the values. Missing fields use their serde defaults.
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This should
    /// never happen in practice since the defaults are compiled into the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults, and saves the updated config.
    /// - If the config file doesn't exist (first run): creates the config
    ///   directory if needed and writes the defaults to it.
    ///
    /// Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }

            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// Serializes the current configuration to TOML and writes it to the
    /// platform-specific config file, creating the config directory if needed.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config cannot be serialized to TOML (shouldn't happen)
    /// - The config directory cannot be created
    /// - The file cannot be written (permissions, disk full, etc.)
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`: Logging level ("debug", "info", "warn", "error")
    /// - `file`: Log file path
    /// - `verbose`: Verbose logging boolean
    /// - `capacity`: Default courses per semester
    /// - `start_season`: Default starting season
    /// - `out_dir`: Plan export directory path
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "capacity" => Some(self.planning.capacity.to_string()),
            "start_season" | "start-season" => Some(self.planning.start_season.clone()),
            "out_dir" | "out-dir" => Some(self.paths.out_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The key is not recognized
    /// - The value cannot be parsed (e.g., "maybe" for the verbose boolean, a
    ///   non-positive capacity, or a season other than Fall/Spring)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "capacity" => {
                let capacity = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid number for 'capacity': '{value}'"))?;
                if capacity == 0 {
                    return Err("'capacity' must be at least 1".to_string());
                }
                self.planning.capacity = capacity;
            }
            "start_season" | "start-season" => match value.parse::<Season>() {
                Ok(season) => self.planning.start_season = season.to_string(),
                Err(_) => {
                    return Err(format!(
                        "Invalid season for 'start_season': '{value}' (expected Fall or Spring)"
                    ));
                }
            },
            "out_dir" | "out-dir" => self.paths.out_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Resets a single configuration value to its default value, taken from the
    /// provided defaults config (typically [`from_defaults()`](Config::from_defaults)).
    /// Updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "capacity" => self.planning.capacity = defaults.planning.capacity,
            "start_season" | "start-season" => self
                .planning
                .start_season
                .clone_from(&defaults.planning.start_season),
            "out_dir" | "out-dir" => self.paths.out_dir.clone_from(&defaults.paths.out_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file, causing the next [`load()`](Config::load)
    /// call to recreate it from defaults. If the config file doesn't exist, this
    /// method succeeds without doing anything.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[planning]")?;
        writeln!(f, "  capacity = {}", self.planning.capacity)?;
        writeln!(f, "  start_season = \"{}\"", self.planning.start_season)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;

        Ok(())
    }
}
