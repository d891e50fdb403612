//! CLI argument definitions for `DegreePlanner`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use degree_planner::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `capacity`, `out_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Generate a degree completion plan for a student.
    ///
    /// Loads a catalog JSON file, gathers the student's remaining required
    /// courses, and schedules them into semesters.
    Plan {
        /// Path to the catalog JSON file
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Student identifier to plan for
        #[arg(short, long, value_name = "ID")]
        student: String,

        /// Season of the first planned semester (Fall or Spring; defaults to config)
        #[arg(long, value_name = "SEASON")]
        start_season: Option<String>,

        /// Year of the first planned semester
        #[arg(long, value_name = "YEAR")]
        start_year: i32,

        /// Maximum courses per semester (defaults to config `capacity`)
        #[arg(long, value_name = "N")]
        capacity: Option<u32>,

        /// Write the plan as JSON to this path (defaults to config `out_dir` when `--export` is set)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Export the plan as JSON even when no output path is given
        #[arg(long)]
        export: bool,
    },
    /// Check a catalog for dangling requirement and prerequisite references.
    Check {
        /// Path to the catalog JSON file
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "degreeplanner",
    about = "DegreePlanner command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config default capacity
    #[arg(long = "config-capacity", value_name = "N")]
    pub config_capacity: Option<u32>,

    /// Override config default start season
    #[arg(long = "config-start-season", value_name = "SEASON")]
    pub config_start_season: Option<String>,

    /// Override config output directory
    #[arg(long = "config-out-dir", value_name = "DIR")]
    pub config_out_dir: Option<PathBuf>,

    /// Override config output directory (short form)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration. The short-form `--out-dir` takes precedence over
    /// `--config-out-dir` when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            capacity: self.config_capacity,
            start_season: self.config_start_season.clone(),
            out_dir: self
                .out_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_out_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
