//! Block-range indexing for IDL source files.
//!
//! Block comments (`/* ... */`) and C++ escape blocks (`%{C++ ... %}`) span
//! several lines. A single forward scan with a bracket-matching stack turns a
//! file into the list of line ranges those blocks occupy, so the classifier
//! can tell whether a changed line sits inside one.

mod scanner;
mod types;


pub use scanner::scan_block_ranges;
pub use types::SpecialBlockRange;
