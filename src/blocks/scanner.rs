//! Single-pass scanner producing the block ranges of one file.

use std::path::Path;

use super::types::{BlockKind, SpecialBlockRange};

/// Scan `contents` (the text of `path`) for block comment and escape block ranges.
///
/// Line numbers are 1-based. Lines that open and close a block comment on the
/// same line are skipped entirely and never produce a range. Unbalanced end
/// tokens are logged and ignored; an end token that closes a block of the
/// other kind leaves that block on the stack.
pub fn scan_block_ranges(path: &Path, contents: &str) -> Vec<SpecialBlockRange> {
    let mut ranges = Vec::new();
    // Last opened block kind together with the line it was opened on.
    let mut stack: Vec<(BlockKind, usize)> = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        let line_no = idx + 1;

        if BlockKind::Comment.opens_and_closes(line) {
            tracing::trace!(path = %path.display(), line_no, "comment opens and closes on one line");
            continue;
        }

        for kind in BlockKind::ALL {
            if kind.is_start(line) {
                tracing::trace!(%kind, line_no, "pushing block start");
                stack.push((kind, line_no));
            }

            if !kind.is_end(line) {
                continue;
            }

            let Some((open_kind, open_line)) = stack.pop() else {
                tracing::debug!(
                    path = %path.display(),
                    line_no,
                    "block end without a matching start"
                );
                continue;
            };

            if open_kind == kind {
                ranges.push(SpecialBlockRange::new(open_line, line_no, kind, path));
            } else {
                tracing::debug!(
                    path = %path.display(),
                    line_no,
                    open = %open_kind,
                    "block end does not match the open block"
                );
                stack.push((open_kind, open_line));
            }
        }
    }

    if !stack.is_empty() {
        tracing::debug!(path = %path.display(), open = stack.len(), "unterminated blocks at end of file");
    }

    ranges
}
