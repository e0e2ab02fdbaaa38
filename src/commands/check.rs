//! The `iidcheck` run: patch in, verdicts out.

use std::io::Read;
use std::path::Path;

use crate::analyze::analyze_patch;
use crate::cli::Cli;
use crate::config::{ColorMode, Config};
use crate::descriptors::DescriptorRegistry;
use crate::error::{IidError, Result};
use crate::report::{
    JsonFormatter, OutputFormatter, Report, SelfTestOutcome, TextFormatter,
    compare_with_reference,
};

/// Everything a run produced, before it is printed.
#[derive(Debug)]
pub struct CheckOutput {
    /// Text for stdout.
    pub text: String,
    pub report: Report,
    /// Set in `--test` mode.
    pub self_test: Option<SelfTestOutcome>,
}

impl CheckOutput {
    /// Map the verdicts onto the process outcome.
    pub fn into_result(self) -> Result<()> {
        if let Some(outcome) = self.self_test {
            if outcome.passed() {
                return Ok(());
            }
            return Err(IidError::SelfTestMismatch(format!(
                "expected {} line(s), found {} line(s), {} differing",
                outcome.expected_lines,
                outcome.found_lines,
                outcome.mismatches.len()
            )));
        }

        if self.report.is_clean() {
            Ok(())
        } else {
            Err(IidError::MissingIid {
                count: self.report.unrevved.len(),
            })
        }
    }
}

/// Run the check and print its output.
pub fn run(cli: &Cli) -> Result<()> {
    let output = check(cli)?;
    print!("{}", output.text);
    output.into_result()
}

/// Run the check without printing anything.
pub fn check(cli: &Cli) -> Result<CheckOutput> {
    if !cli.repo.is_dir() {
        return Err(IidError::UserError(format!(
            "repository root '{}' is not a directory",
            cli.repo.display()
        )));
    }

    let mut config = Config::discover(cli.config.as_deref(), &cli.repo)?;
    if cli.no_color {
        config.color = ColorMode::Never;
    }

    let patch = read_patch(cli.input_path().map(|p| p.as_path()))?;

    let registry = DescriptorRegistry::from_config(&config);
    let analysis = analyze_patch(&patch, &cli.repo, &registry, config.exclude_set()?);

    tracing::debug!(
        clean = analysis.is_clean(),
        required = analysis.interfaces_requiring_new_iid.len(),
        revved = analysis.revved_interfaces.len(),
        missing_files = analysis.missing_files.len(),
        "analysis finished"
    );

    let report = Report::from_analysis(&analysis);

    if let Some(reference_path) = &cli.test {
        let reference = std::fs::read_to_string(reference_path)
            .map_err(|e| IidError::io(reference_path.display().to_string(), e))?;
        let outcome = compare_with_reference(&reference, &report.error_messages());
        return Ok(CheckOutput {
            text: outcome.render(),
            report,
            self_test: Some(outcome),
        });
    }

    let text = if cli.json {
        JsonFormatter.format(&report)?
    } else {
        TextFormatter::new(config.color)
            .with_verbose(cli.verbose)
            .format(&report)?
    };

    Ok(CheckOutput {
        text,
        report,
        self_test: None,
    })
}

/// Read the whole patch. Invalid UTF-8 is replaced rather than rejected.
fn read_patch(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) => {
            std::fs::read(path).map_err(|e| IidError::io(path.display().to_string(), e))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| IidError::io("<stdin>", e))?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
