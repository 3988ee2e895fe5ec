//! # Odinsweep - Cleanup for Generated Odin Bindings
//!
//! Binding generators emit a struct declaration for every type they see,
//! including opaque ones, which leaves empty `Name :: struct {}` husks
//! scattered through the output. Odinsweep sweeps a directory of generated
//! files and removes those empty declarations in place.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install odinsweep
//! cargo install odinsweep
//!
//! # Clean a directory of generated bindings
//! odinsweep clean --directory ./odin-assimp
//!
//! # Preview without writing anything
//! odinsweep clean --directory ./odin-assimp --dry-run
//! ```

pub mod cleaner;
pub mod cli;
pub mod config;

pub use cleaner::BatchCleaner;
pub use cli::{Cli, Output};
pub use config::SweepConfig;

/// Result type alias for Odinsweep operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
