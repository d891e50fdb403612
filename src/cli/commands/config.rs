//! Config command handler
//!
//! Fronts the planning settings (`capacity`, `start_season`, `out_dir`) plus
//! the logging keys. Mutations echo the stored value back, since `set` may
//! normalize input (e.g., `start_season` is canonicalized to Fall/Spring).

use crate::args::ConfigSubcommand;
use degree_planner::config::Config;
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => print!("{config}"),
        Some(ConfigSubcommand::Get { key: Some(key) }) => match show_value(config, &key) {
            Ok(value) => println!("{value}"),
            Err(msg) => fail(&msg),
        },
        Some(ConfigSubcommand::Set { key, value }) => match apply_set(config, &key, &value) {
            Ok(confirmation) => persist(config, &confirmation),
            Err(msg) => fail(&msg),
        },
        Some(ConfigSubcommand::Unset { key }) => match apply_unset(config, defaults, &key) {
            Ok(confirmation) => persist(config, &confirmation),
            Err(msg) => fail(&msg),
        },
        Some(ConfigSubcommand::Reset) => reset_interactive(),
    }
}

fn show_value(config: &Config, key: &str) -> Result<String, String> {
    config.get(key).ok_or_else(|| unknown_key(key))
}

fn apply_set(config: &mut Config, key: &str, value: &str) -> Result<String, String> {
    if config.get(key).is_none() {
        return Err(unknown_key(key));
    }
    config.set(key, value)?;

    // Echo what was actually stored, not what was typed.
    let stored = config.get(key).unwrap_or_default();
    Ok(format!("✓ {key} = {stored}"))
}

fn apply_unset(config: &mut Config, defaults: &Config, key: &str) -> Result<String, String> {
    if config.get(key).is_none() {
        return Err(unknown_key(key));
    }
    config.unset(key, defaults)?;

    let stored = config.get(key).unwrap_or_default();
    Ok(format!("✓ {key} restored to default ({stored})"))
}

fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key '{key}'. Valid keys: level, file, verbose, capacity, start_season, out_dir"
    )
}

fn persist(config: &Config, confirmation: &str) {
    if let Err(e) = config.save() {
        fail(&format!("Failed to save config: {e}"));
    }
    println!("{confirmation}");
}

fn fail(msg: &str) -> ! {
    eprintln!("✗ {msg}");
    std::process::exit(1);
}

fn reset_interactive() {
    let config_file = Config::get_config_file_path();
    if !config_file.exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!(
        "Reset all settings in {} to defaults? [y/N] ",
        config_file.display()
    );
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).ok();

    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        match Config::reset() {
            Ok(()) => println!("✓ Config reset to defaults"),
            Err(e) => fail(&format!("Failed to remove config file: {e}")),
        }
    } else {
        println!("Reset cancelled");
    }
}
