//! Configuration command implementations
//!
//! Commands for managing Odinsweep configuration.

use crate::cli::ConfigCommands;
use crate::cli::Output;
use crate::config::SweepConfig;
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

/// Execute config commands
pub fn execute(cmd: ConfigCommands, config_path: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Init => init(output),
        ConfigCommands::Validate => validate(config_path, output),
        ConfigCommands::Show => show(config_path, output),
    }
}

fn init(output: &Output) -> Result<()> {
    output.header("🔧 Initializing Configuration");

    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let config_path = current_dir.join("odinsweep.yml");

    // Check if config already exists
    if config_path.exists() {
        output.warning("Configuration file already exists");
        if !output.confirm("Do you want to overwrite it?") {
            output.info("Configuration initialization cancelled");
            return Ok(());
        }
    }

    let config = SweepConfig::default();
    config.save_to_file(&config_path)?;

    output.success("Configuration file created successfully");
    output.table_row("Config file", &config_path.display().to_string());
    output.info("Edit odinsweep.yml to customize your settings");

    Ok(())
}

fn validate(config_path: Option<&str>, output: &Output) -> Result<()> {
    output.header("✅ Validating Configuration");

    let path = resolve_config_path(config_path);
    let Some(path) = path else {
        output.error("Configuration file not found");
        output.indent("Run 'odinsweep config init' to create a configuration file");
        bail!("Configuration file not found");
    };

    let config = SweepConfig::load_from_file(&path)?;
    config.validate()?;

    output.success("Configuration is valid");
    output.table_row("Config file", &path.display().to_string());
    output.table_row("Directory", &config.clean.directory);
    output.table_row("Extension", &config.clean.extension);

    Ok(())
}

fn show(config_path: Option<&str>, output: &Output) -> Result<()> {
    output.header("📋 Current Configuration");

    let (config, source) = match resolve_config_path(config_path) {
        Some(path) => {
            let config = SweepConfig::load_from_file(&path)?;
            (config, path.display().to_string())
        }
        None => {
            output.warning("No configuration file found, showing defaults");
            (SweepConfig::default(), "built-in defaults".to_string())
        }
    };

    output.table_row("Source", &source);
    output.blank_line();

    let rendered = serde_yml::to_string(&config).context("Failed to serialize configuration")?;
    for line in rendered.lines() {
        output.indent(line);
    }

    Ok(())
}

/// Resolve an explicit --config path or fall back to upward discovery
fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
    match config_path {
        Some(path) if Path::new(path).exists() => Some(PathBuf::from(path)),
        Some(_) => None,
        None => SweepConfig::find_config_file(),
    }
}
