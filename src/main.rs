//! iidcheck: flags IDL interfaces changed by a patch without a new IID.
//!
//! This is the main entry point for the `iidcheck` CLI. It parses arguments,
//! installs logging, runs the check and maps the outcome to an exit code.

mod analyze;
mod blocks;
mod cli;
mod commands;
pub mod config;
mod descriptors;
mod diff;
pub mod error;
pub mod exit_codes;
mod report;
mod source;

#[cfg(test)]
mod test_support;

use cli::Cli;
use error::IidError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Log to stderr. `RUST_LOG` wins over the default; `--debug` always raises
/// the crate to `debug`.
fn init_logging(debug: bool) {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iidcheck=warn"));
    if debug {
        if let Ok(directive) = "iidcheck=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Verdicts were already printed to stdout.
            if !matches!(
                err,
                IidError::MissingIid { .. } | IidError::SelfTestMismatch(_)
            ) {
                eprintln!("Error: {}", err);
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
