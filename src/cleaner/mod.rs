//! Batch cleanup of generated Odin bindings
//!
//! Binding generators emit a declaration for every struct they encounter,
//! including opaque ones that end up with no fields. This module finds
//! those empty declarations and removes them from the generated files in
//! place.

use serde::Serialize;

pub mod engine;
pub mod pattern;


pub use engine::BatchCleaner;
pub use pattern::EmptyStructPattern;

/// Result of cleaning a single file
#[derive(Debug, Clone, Serialize)]
pub struct CleanedFile {
    /// File path
    pub path: String,

    /// Number of empty struct declarations removed
    pub removed: usize,

    /// Whether the file was written back
    pub rewritten: bool,
}

/// A file that was skipped because of a read or write failure
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    /// File path
    pub path: String,

    /// Why the file was skipped
    pub reason: String,
}

/// Aggregate result of a directory pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanSummary {
    /// Candidate files examined
    pub files_scanned: usize,

    /// Files actually written back
    pub files_rewritten: usize,

    /// Empty struct declarations removed (or that would be, in a dry run)
    pub structs_removed: usize,

    /// Files skipped due to errors (only populated with skip_errors)
    pub skipped: Vec<SkippedFile>,
}
