//! Batch cleaner engine
//!
//! Walks one directory (non-recursive), selects files by suffix, strips
//! empty struct declarations from each, and writes the result back in
//! place. Files are processed strictly one at a time.

use super::{CleanSummary, CleanedFile, EmptyStructPattern, SkippedFile};
use crate::config::SweepConfig;
use anyhow::{Context, Result, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Batch cleaner for a directory of generated files
pub struct BatchCleaner {
    pattern: EmptyStructPattern,
    extension: String,
    exclude_globset: GlobSet,
    skip_unchanged_writes: bool,
    skip_errors: bool,
    dry_run: bool,
    verbose: bool,
}

impl BatchCleaner {
    /// Create a new cleaner from configuration
    pub fn from_config(config: &SweepConfig, dry_run: bool, verbose: bool) -> Result<Self> {
        let pattern = EmptyStructPattern::new()?;

        // Build GlobSet from exclude patterns
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.clean.exclude_patterns {
            let glob = Glob::new(pattern)
                .with_context(|| format!("Invalid glob pattern: {}", pattern))?;
            builder.add(glob);
        }
        let exclude_globset = builder
            .build()
            .context("Failed to build exclude pattern globset")?;

        Ok(Self {
            pattern,
            extension: config.clean.extension.clone(),
            exclude_globset,
            skip_unchanged_writes: config.clean.skip_unchanged_writes,
            skip_errors: config.clean.skip_errors,
            dry_run,
            verbose,
        })
    }

    /// Run the cleanup over every candidate file in `dir`.
    ///
    /// Entries are processed in directory listing order; each file is fully
    /// read, transformed, and written before the next is opened. A missing
    /// directory is fatal before any file is touched. Per-file errors abort
    /// the run unless skip_errors is set, in which case they are recorded
    /// in the summary and processing continues.
    pub fn clean_directory<P: AsRef<Path>>(&self, dir: P) -> Result<CleanSummary> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            bail!("Directory not found or not a directory: {}", dir.display());
        }

        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to list directory: {}", dir.display()))?;

        let mut summary = CleanSummary::default();

        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to read directory entry: {}", dir.display()))?;
            let path = entry.path();

            if !self.is_candidate(&path) {
                continue;
            }
            summary.files_scanned += 1;

            match self.clean_file(&path) {
                Ok(cleaned) => {
                    summary.structs_removed += cleaned.removed;
                    if cleaned.rewritten {
                        summary.files_rewritten += 1;
                    }
                }
                Err(err) if self.skip_errors => {
                    debug!(path = %path.display(), "skipping file after error");
                    summary.skipped.push(SkippedFile {
                        path: path.display().to_string(),
                        reason: format!("{err:#}"),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        Ok(summary)
    }

    /// Clean a single file in place.
    ///
    /// Reads the entire content as UTF-8, removes every empty struct
    /// declaration, and overwrites the file. Zero matches is not an error;
    /// the no-op write is skipped when skip_unchanged_writes is set.
    pub fn clean_file<P: AsRef<Path>>(&self, path: P) -> Result<CleanedFile> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let removed = self.pattern.matches(&content);
        debug!(path = %path.display(), removed, "scanned file");

        if removed == 0 && self.skip_unchanged_writes {
            return Ok(CleanedFile {
                path: path.display().to_string(),
                removed: 0,
                rewritten: false,
            });
        }

        let rewritten = if self.dry_run {
            false
        } else {
            let cleaned = self.pattern.strip(&content);
            fs::write(path, cleaned.as_bytes())
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            true
        };

        Ok(CleanedFile {
            path: path.display().to_string(),
            removed,
            rewritten,
        })
    }

    /// Check whether an entry is a candidate: a regular file whose name
    /// ends with the configured suffix and that no exclude pattern claims.
    /// Non-candidates are never opened.
    fn is_candidate(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if !name.ends_with(&self.extension) {
            return false;
        }

        if self.exclude_globset.is_match(name) || self.exclude_globset.is_match(path) {
            if self.verbose {
                println!("Skipping excluded file: {}", path.display());
            }
            return false;
        }

        true
    }
}
