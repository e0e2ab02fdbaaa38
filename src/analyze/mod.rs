//! Patch traversal: the state machine that turns diff lines into verdicts.
//!
//! The driver walks the patch once, in order. It tracks which IDL file and
//! which interface the cursor is in, maps every changed line to its
//! pre-patch line number, consults the classifier, the descriptor registry
//! and the on-disk source tree, and accumulates three result sets:
//! interfaces that need a new IID, interfaces whose IID did change, and the
//! IDL file owning each interface seen.

mod cursor;
mod driver;
mod result;
mod state;


pub use driver::analyze_patch;
pub use result::Analysis;
