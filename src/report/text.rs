//! Plain-text rendering with optional ANSI colors.

use std::fmt::Write;

use crate::config::ColorMode;
use crate::error::Result;

use super::OutputFormatter;
use super::model::{Report, missing_file_message};

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    const fn prefix(self) -> &'static str {
        match self {
            Level::Info => "INFO:",
            Level::Warning => "WARNING:",
            Level::Error => "ERROR:",
        }
    }

    const fn color(self) -> &'static str {
        match self {
            Level::Info => ansi::GREEN,
            Level::Warning => ansi::YELLOW,
            Level::Error => ansi::RED,
        }
    }
}

/// Prefixed, optionally colored verdict lines.
///
/// Warnings come first, then the `INFO:` lines (verbose only), then errors.
pub struct TextFormatter {
    use_colors: bool,
    verbose: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.enabled(),
            verbose: false,
        }
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn line(&self, out: &mut String, level: Level, message: &str) {
        if self.use_colors {
            writeln!(out, "{}{}{} {message}", level.color(), level.prefix(), ansi::RESET).ok();
        } else {
            writeln!(out, "{} {message}", level.prefix()).ok();
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut out = String::new();

        for file in &report.missing_files {
            self.line(&mut out, Level::Warning, &missing_file_message(file));
        }

        if self.verbose {
            for verdict in &report.revved {
                self.line(&mut out, Level::Info, &verdict.looks_good_message());
            }
        }

        for verdict in &report.unrevved {
            self.line(&mut out, Level::Error, &verdict.needs_new_iid_message());
        }

        Ok(out)
    }
}
