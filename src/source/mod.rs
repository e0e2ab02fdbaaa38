//! On-disk view of the checked-out source tree.
//!
//! The patch is analyzed against the files as they exist after the patch was
//! applied. Each file is read at most once per run; its lines and block
//! ranges are cached by path. A file that cannot be read is remembered as
//! missing so every later lookup degrades to the conservative default.

mod tree;

#[cfg(test)]
mod tests;

pub use tree::{SourceFile, SourceTree};
