//! Verdict reporting: text and JSON rendering plus the self-test comparison.

mod json;
mod model;
mod text;


pub use json::JsonFormatter;
pub use model::Report;
pub use self_test::{SelfTestOutcome, compare_with_reference};
pub use text::TextFormatter;

use crate::error::Result;

/// Renders a [`Report`] into the text written to stdout.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}
