//! Clean command implementation
//!
//! Runs the batch cleaner over a directory of generated binding files.

use crate::cleaner::{BatchCleaner, CleanSummary};
use crate::cli::Output;
use crate::config::SweepConfig;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Execute the clean command
pub fn execute(
    directory: Option<String>,
    extension: Option<String>,
    dry_run: bool,
    skip_errors: bool,
    format: &str,
    config_path: Option<&str>,
    output: &Output,
) -> Result<()> {
    output.header("🧹 Cleaning Generated Bindings");

    let mut config = load_config(config_path, output)?;

    // CLI flags override the configuration file
    if let Some(dir) = directory {
        config.clean.directory = dir;
    }
    if let Some(ext) = extension {
        config.clean.extension = ext;
    }
    if skip_errors {
        config.clean.skip_errors = true;
    }
    config.validate()?;

    let dir = PathBuf::from(&config.clean.directory);
    let cleaner = BatchCleaner::from_config(&config, dry_run, output.is_verbose())?;

    if dry_run {
        output.info("Dry run: no files will be written");
    }
    output.step(&format!(
        "Scanning {} for '{}' files",
        dir.display(),
        config.clean.extension
    ));

    let summary = cleaner.clean_directory(&dir)?;

    output.blank_line();
    match format {
        "json" => {
            let json_output = serde_json::to_string_pretty(&summary)?;
            println!("{}", json_output);
        }
        _ => display_summary(&summary, dry_run, output),
    }

    Ok(())
}

/// Load configuration from an explicit path, a discovered file, or defaults
fn load_config(config_path: Option<&str>, output: &Output) -> Result<SweepConfig> {
    if let Some(path) = config_path {
        return SweepConfig::load_from_file(Path::new(path));
    }

    if let Some(found) = SweepConfig::find_config_file() {
        output.verbose(&format!("Using configuration: {}", found.display()));
        SweepConfig::load_from_file(&found)
    } else {
        output.warning("No configuration file found, using defaults");
        Ok(SweepConfig::default())
    }
}

/// Display the cleanup summary in text format
fn display_summary(summary: &CleanSummary, dry_run: bool, output: &Output) {
    if summary.structs_removed == 0 {
        output.success("No empty struct declarations found");
    } else if dry_run {
        output.success(&format!(
            "Would remove {} empty struct declarations",
            summary.structs_removed
        ));
    } else {
        output.success(&format!(
            "Removed {} empty struct declarations",
            summary.structs_removed
        ));
    }

    output.table_row("Files scanned", &summary.files_scanned.to_string());
    output.table_row("Files rewritten", &summary.files_rewritten.to_string());

    if !summary.skipped.is_empty() {
        output.blank_line();
        output.warning(&format!(
            "Skipped {} files due to errors",
            summary.skipped.len()
        ));
        for skipped in &summary.skipped {
            output.list_item(&format!("{}: {}", skipped.path, skipped.reason));
        }
    }
}
