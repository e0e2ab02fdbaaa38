//! Pre-patch line bookkeeping.

use crate::diff::{is_addition_line, is_removal_line};

/// Tracks the pre-patch line number the current patch line corresponds to.
///
/// Context and added lines advance the cursor by one. Removed lines keep it
/// where it is. An addition right after a removal reuses the removal's
/// number, modeling an in-place replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCursor {
    line: i64,
    last_was_removal: bool,
}

impl Default for LineCursor {
    fn default() -> Self {
        Self {
            line: -1,
            last_was_removal: false,
        }
    }
}

impl LineCursor {
    pub fn line(&self) -> i64 {
        self.line
    }

    /// Move past `line`.
    pub fn advance(&mut self, line: &str) {
        if is_addition_line(line) && self.last_was_removal {
            self.last_was_removal = false;
        } else if is_removal_line(line) {
            self.last_was_removal = true;
        } else {
            self.line += 1;
            self.last_was_removal = false;
        }
    }

    /// Jump to the position given by a hunk header.
    pub fn reset(&mut self, line: i64) {
        self.line = line;
        self.last_was_removal = false;
    }
}
