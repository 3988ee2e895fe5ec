//! Command-line interface for Odinsweep
//!
//! This module provides the main CLI structure and command handling for
//! Odinsweep. It uses clap for argument parsing.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// Odinsweep - Empty-struct cleanup for generated Odin bindings
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Remove empty struct declarations from a directory of generated files
    Clean {
        /// Directory containing the generated files
        #[arg(short, long, env = "ODINSWEEP_DIRECTORY")]
        directory: Option<String>,

        /// Filename suffix selecting candidate files (e.g. ".odin")
        #[arg(short, long)]
        extension: Option<String>,

        /// Report what would be removed without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Skip files that fail to read or write instead of aborting the run
        #[arg(long)]
        skip_errors: bool,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show version information
    Version,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize configuration
    Init,
    /// Validate configuration
    Validate,
    /// Show current configuration
    Show,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        // Initialize output handler with global verbose and quiet settings
        let output = Output::new(self.verbose, self.quiet);

        match self.command {
            Some(Commands::Clean {
                directory,
                extension,
                dry_run,
                skip_errors,
                format,
            }) => commands::clean::execute(
                directory,
                extension,
                dry_run,
                skip_errors,
                &format,
                self.config.as_deref(),
                &output,
            ),
            Some(Commands::Config(cmd)) => {
                commands::config::execute(cmd, self.config.as_deref(), &output)
            }
            Some(Commands::Version) => commands::version::execute(&output),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
