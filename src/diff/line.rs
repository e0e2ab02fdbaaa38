//! Predicates and extractors over a single diff line.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use super::helpers::{parse_diff_git_line, parse_hunk_header};
use crate::source::SourceFile;

/// `interface <name> : <bases>`, optionally behind one diff marker.
static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\s*interface\s+([^:]+?)\s*:\s*(.*)$").expect("valid definition regex")
});

/// `@@ <ranges> @@ interface <name> : <bases>`
static CONTEXT_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@\s+.*?\s+@@\s*interface\s+([^:]+?)\s*:\s*(.*)$")
        .expect("valid context regex")
});

static IID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"uuid\((.*)\)").expect("valid uuid regex"));

static CONSTANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]\s+const\s").expect("valid const regex"));

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]\s*//").expect("valid comment regex"));

static CLOSING_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s*\}").expect("valid brace regex"));

// ============================================================================
// Markers
// ============================================================================

/// A line starting with exactly one `+` (not the `+++` file header).
pub fn is_addition_line(line: &str) -> bool {
    line.starts_with('+') && !line.starts_with("+++")
}

/// A line starting with exactly one `-` (not the `---` file header).
pub fn is_removal_line(line: &str) -> bool {
    line.starts_with('-') && !line.starts_with("---")
}

pub fn is_change_line(line: &str) -> bool {
    is_addition_line(line) || is_removal_line(line)
}

/// Hunk headers start with `@@`.
pub fn is_context_line(line: &str) -> bool {
    line.starts_with("@@")
}

/// `--- /dev/null`: the file is created by the patch.
pub fn signifies_creation(line: &str) -> bool {
    line.starts_with("--- /dev/null")
}

/// `+++ /dev/null`: the file is deleted by the patch.
pub fn signifies_deletion(line: &str) -> bool {
    line.starts_with("+++ /dev/null")
}

/// The content of a change line without its marker.
pub fn change_content(line: &str) -> Option<&str> {
    if !is_change_line(line) {
        return None;
    }
    Some(&line[1..])
}

/// A change line with nothing but whitespace after the marker.
pub fn is_blank_change(line: &str) -> bool {
    change_content(line).is_some_and(|content| content.trim_end().is_empty())
}

// ============================================================================
// File headers
// ============================================================================

/// The new-side path of a `diff --git a/<path> b/<path>` header.
pub fn new_file_path(line: &str) -> Option<String> {
    line.strip_prefix("diff --git ").and_then(parse_diff_git_line)
}

/// Identity of an IDL file entered by the patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdlFileHeader {
    /// File name without directories, e.g. `nsIFoo.idl`.
    pub name: String,
    /// Repository-relative path with forward slashes.
    pub relative_path: String,
    /// `relative_path` joined onto the repository root.
    pub path: PathBuf,
}

/// Parse a file header whose new-side path ends in `.idl`.
pub fn parse_idl_file_start(line: &str, root: &Path) -> Option<IdlFileHeader> {
    let relative_path = new_file_path(line)?;
    if !relative_path.ends_with(".idl") {
        return None;
    }

    let name = relative_path
        .rsplit('/')
        .next()
        .unwrap_or(relative_path.as_str())
        .to_string();
    let path = root.join(&relative_path);

    Some(IdlFileHeader {
        name,
        relative_path,
        path,
    })
}

// ============================================================================
// Interfaces
// ============================================================================

/// The interface name on a (possibly marked) `interface <name> : <bases>` line.
pub fn definition_interface_name(line: &str) -> Option<&str> {
    DEFINITION
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end())
}

/// An interface definition, excluding `;`-terminated forward declarations.
pub fn is_interface_definition_line(line: &str) -> bool {
    if definition_interface_name(line).is_none() {
        return false;
    }

    let trimmed = line.trim_end();
    if trimmed.is_empty() || trimmed.ends_with(';') {
        tracing::trace!(line, "forward declaration");
        return false;
    }

    true
}

/// The interface named in the trailing text of a hunk header.
pub fn context_interface_name(line: &str) -> Option<&str> {
    CONTEXT_DEFINITION
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end())
}

/// Cursor position before the first line of a hunk: old start minus one.
///
/// Headers that do not parse yield 0.
pub fn hunk_start_line(line: &str) -> i64 {
    match parse_hunk_header(line) {
        Some((old_start, _)) => old_start as i64 - 1,
        None => {
            tracing::debug!(line, "unparsable hunk header");
            0
        }
    }
}

// ============================================================================
// IIDs
// ============================================================================

/// The text between `uuid(` and the last `)` on the line.
pub fn extract_iid(line: &str) -> Option<&str> {
    IID.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn is_iid_line(line: &str) -> bool {
    extract_iid(line).is_some()
}

pub fn is_iid_addition(line: &str) -> bool {
    is_addition_line(line) && is_iid_line(line)
}

pub fn is_iid_removal(line: &str) -> bool {
    is_removal_line(line) && is_iid_line(line)
}

// ============================================================================
// Members
// ============================================================================

/// A changed `const ...` member, indented after the diff marker.
pub fn is_constant_expression(line: &str) -> bool {
    if !is_change_line(line) {
        return false;
    }

    let found = CONSTANT.is_match(line);
    if found {
        tracing::trace!(line, "constant expression");
    }
    found
}

/// A changed line whose content starts with `//`.
pub fn is_single_line_comment(line: &str) -> bool {
    is_change_line(line) && LINE_COMMENT.is_match(line)
}

/// A changed line that is a `//` comment or lies inside a block range of `file`.
///
/// `line_no` is the pre-patch line number the cursor is on. Without a loaded
/// file only the `//` form is recognized.
pub fn is_comment_line(line: &str, line_no: i64, file: Option<&SourceFile>) -> bool {
    if !is_change_line(line) {
        return false;
    }

    if is_single_line_comment(line) {
        return true;
    }

    match file.and_then(|f| f.block_containing(line_no)) {
        Some(range) => {
            tracing::debug!(
                line_no,
                %range,
                kind = %range.kind(),
                lines = range.line_count(),
                file = %range.file_path().display(),
                "line inside block"
            );
            true
        }
        None => false,
    }
}

/// A removed closing brace, e.g. `-};`.
pub fn is_end_of_interface_removal(line: &str) -> bool {
    is_removal_line(line) && CLOSING_BRACE.is_match(line)
}
