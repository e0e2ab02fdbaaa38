//! Block kinds and the line ranges they occupy.

use std::fmt;
use std::path::{Path, PathBuf};

/// The kinds of special block recognized in IDL sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `/*` ... `*/`
    Comment,
    /// `%{ C++` ... `%}`
    Escape,
}

impl BlockKind {
    pub const ALL: [BlockKind; 2] = [BlockKind::Comment, BlockKind::Escape];

    pub fn start_token(self) -> &'static str {
        match self {
            BlockKind::Comment => "/*",
            BlockKind::Escape => "%{",
        }
    }

    pub fn end_token(self) -> &'static str {
        match self {
            BlockKind::Comment => "*/",
            BlockKind::Escape => "%}",
        }
    }

    /// A block starts on a line whose first non-blank text is the start token.
    ///
    /// Escape blocks additionally need the `C++` language tag, optionally
    /// separated from `%{` by whitespace.
    pub fn is_start(self, line: &str) -> bool {
        let Some(rest) = line.trim_start().strip_prefix(self.start_token()) else {
            return false;
        };
        match self {
            BlockKind::Comment => true,
            BlockKind::Escape => rest.trim_start().starts_with("C++"),
        }
    }

    /// A block ends on a line whose last non-blank text is the end token.
    pub fn is_end(self, line: &str) -> bool {
        line.trim_end().ends_with(self.end_token())
    }

    /// Whether the start token and a later end token both appear on `line`.
    pub fn opens_and_closes(self, line: &str) -> bool {
        match line.find(self.start_token()) {
            Some(pos) => line[pos + self.start_token().len()..].contains(self.end_token()),
            None => false,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[SpecialBlockType ({})]", self.start_token())
    }
}

/// An inclusive line interval of one file occupied by a special block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialBlockRange {
    start_line: usize,
    end_line: usize,
    kind: BlockKind,
    file_path: PathBuf,
}

impl SpecialBlockRange {
    pub fn new(start_line: usize, end_line: usize, kind: BlockKind, file_path: &Path) -> Self {
        Self {
            start_line,
            end_line,
            kind,
            file_path: file_path.to_path_buf(),
        }
    }

    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn end_line(&self) -> usize {
        self.end_line
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Line `line` is contained iff `start_line <= line <= end_line`.
    pub fn contains(&self, line: i64) -> bool {
        line >= self.start_line() as i64 && line <= self.end_line() as i64
    }

    /// Number of lines covered, both ends included.
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

impl fmt::Display for SpecialBlockRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[SpecialBlockRange ({}, {})]",
            self.start_line, self.end_line
        )
    }
}
