//! Command implementations for the Odinsweep CLI
//!
//! Each command is organized into its own module.

pub mod clean;
pub mod config;
pub mod version;
