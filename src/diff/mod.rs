//! Line classification for unified diff output.
//!
//! Every function here looks at a single patch line in isolation:
//! - markers: addition, removal, hunk header, file header, `/dev/null`
//! - IDL facts: interface definitions, IIDs, constants, comments
//! - extractors: file paths, interface names, hunk start lines
//!
//! Cross-line context (which file, which interface) is tracked by `analyze`.

mod helpers;
mod line;


pub use line::{
    IdlFileHeader, context_interface_name, definition_interface_name, hunk_start_line,
    is_addition_line, is_blank_change, is_change_line, is_comment_line, is_constant_expression,
    is_context_line, is_end_of_interface_removal, is_iid_addition, is_iid_line, is_iid_removal,
    is_interface_definition_line, is_removal_line, is_single_line_comment, new_file_path,
    parse_idl_file_start, signifies_creation, signifies_deletion,
};
