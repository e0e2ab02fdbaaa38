//! Command implementation for iidcheck.
//!
//! The CLI has a single entry point: read the patch, analyze it against the
//! repository, render the verdicts and translate them into an error for the
//! exit code.

mod check;


pub use check::run;
