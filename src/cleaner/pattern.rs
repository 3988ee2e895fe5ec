//! Empty struct declaration pattern
//!
//! The exact shape the generator emits for an opaque type: an identifier,
//! the literal ` :: struct {`, a line break, and a `}` alone on the next
//! line. Anything else between the braces, even a whitespace-only line,
//! means the struct has a body and is left alone.

use anyhow::{Context, Result};
use regex::Regex;
use std::borrow::Cow;

/// Multi-line pattern for an empty struct declaration. The match consumes
/// the identifier through the closing brace, but not the trailing newline.
const EMPTY_STRUCT: &str = r"(?m)^([A-Za-z_][A-Za-z0-9_]*) :: struct \{\n\}$";

/// Matcher for empty struct declarations in generated Odin source
#[derive(Debug, Clone)]
pub struct EmptyStructPattern {
    regex: Regex,
}

impl EmptyStructPattern {
    /// Create the matcher
    pub fn new() -> Result<Self> {
        let regex = Regex::new(EMPTY_STRUCT).context("Invalid empty-struct pattern")?;
        Ok(Self { regex })
    }

    /// Count occurrences without modifying anything
    pub fn matches(&self, content: &str) -> usize {
        self.regex.find_iter(content).count()
    }

    /// Remove every non-overlapping occurrence. Returns borrowed content
    /// when nothing matched.
    pub fn strip<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(content, "")
    }
}
