//! Per-path cache of source files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::blocks::{SpecialBlockRange, scan_block_ranges};

/// A fully loaded source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    lines: Vec<String>,
    ranges: Vec<SpecialBlockRange>,
}

impl SourceFile {
    /// Build a source file from its text.
    pub fn parse(path: &Path, contents: &str) -> Self {
        Self {
            lines: contents.lines().map(str::to_string).collect(),
            ranges: scan_block_ranges(path, contents),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn ranges(&self) -> &[SpecialBlockRange] {
        &self.ranges
    }

    /// The first block range containing line `line_no`, if any.
    pub fn block_containing(&self, line_no: i64) -> Option<&SpecialBlockRange> {
        self.ranges.iter().find(|range| range.contains(line_no))
    }

    /// Whether `needle` occurs in any line with a 0-based index in `start..=end`.
    ///
    /// Negative starts search from the top of the file. Indices past the end
    /// of the file are ignored.
    pub fn mentions(&self, needle: &str, start: i64, end: i64) -> bool {
        let Some(last) = self.lines.len().checked_sub(1) else {
            return false;
        };
        let start = start.max(0) as usize;
        if end < 0 {
            return false;
        }
        let end = (end as usize).min(last);
        if start > end {
            return false;
        }

        self.lines[start..=end].iter().any(|line| line.contains(needle))
    }

    /// Whether `needle` occurs anywhere in the file.
    pub fn mentions_anywhere(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

/// Lazily populated cache of source files keyed by path.
#[derive(Debug, Default)]
pub struct SourceTree {
    files: HashMap<PathBuf, Option<SourceFile>>,
}

impl SourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the file at `path`, reading it from disk on first access.
    ///
    /// Returns `None` when the file cannot be read. The failure is logged once
    /// and cached like a successful read.
    pub fn get(&mut self, path: &Path) -> Option<&SourceFile> {
        self.files
            .entry(path.to_path_buf())
            .or_insert_with(|| load(path))
            .as_ref()
    }

    /// Whether `path` has been requested before.
    #[cfg(test)]
    pub fn is_cached(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    /// Insert an already loaded file, replacing any cached entry.
    #[cfg(test)]
    pub fn insert(&mut self, path: impl Into<PathBuf>, file: SourceFile) {
        self.files.insert(path.into(), Some(file));
    }
}

fn load(path: &Path) -> Option<SourceFile> {
    match std::fs::read(path) {
        Ok(bytes) => {
            let contents = String::from_utf8_lossy(&bytes);
            let file = SourceFile::parse(path, &contents);
            tracing::debug!(
                path = %path.display(),
                lines = file.lines().len(),
                blocks = file.ranges().len(),
                "loaded source file"
            );
            Some(file)
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "source file not readable");
            None
        }
    }
}
