//! Helper functions for diff header parsing.

/// Parse the file path from the remainder of a "diff --git" line.
///
/// Handles various formats:
/// - "a/path/to/file b/path/to/file" (normal)
/// - "a/path/to/file b/path/to/renamed" (rename)
/// - "a/path b/path" (short paths)
///
/// Returns the "b/" path (new file path), or None if parsing fails.
pub fn parse_diff_git_line(rest: &str) -> Option<String> {
    // Paths may contain spaces, so split on the last " b/".
    if let Some(b_pos) = rest.rfind(" b/") {
        let b_path = rest[b_pos + 3..].trim_end();
        if b_path.is_empty() {
            return None;
        }
        return Some(normalize_path(b_path));
    }

    None
}

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@", optionally followed
/// by context text. Both ranges must carry a length; the short
/// "@@ -old_start +new_start @@" form is rejected.
///
/// Returns (old_start, new_start) or None if parsing fails.
pub fn parse_hunk_header(line: &str) -> Option<(usize, usize)> {
    let line = line.strip_prefix("@@")?.trim_start();

    let end_marker = line.find(" @@")?;
    let range_part = &line[..end_marker];

    let parts: Vec<&str> = range_part.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }

    let old_part = parts[0].strip_prefix('-')?;
    let new_part = parts[1].strip_prefix('+')?;

    let old_start = parse_range_start(old_part)?;
    let new_start = parse_range_start(new_part)?;

    Some((old_start, new_start))
}

/// Parse the start line from a "start,len" range specification.
fn parse_range_start(range: &str) -> Option<usize> {
    let (start, len) = range.split_once(',')?;
    len.parse::<usize>().ok()?;
    start.parse().ok()
}

/// Normalize a file path to use forward slashes.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
