//! JSON rendering of the report.

use crate::error::{IidError, Result};

use super::OutputFormatter;
use super::model::Report;

/// Pretty-printed JSON of the whole [`Report`].
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut out = serde_json::to_string_pretty(report)
            .map_err(|e| IidError::UserError(format!("failed to serialize report: {e}")))?;
        out.push('\n');
        Ok(out)
    }
}
