//! CLI argument parsing for iidcheck.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The run itself lives in the `commands` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Check that IDL interfaces changed by a patch also received a new IID.
///
/// Reads a unified diff (git style headers) and reports every interface whose
/// binary shape changed without an IID change. The repository must be checked
/// out at the revision the patch produces.
#[derive(Parser, Debug)]
#[command(name = "iidcheck")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Root of the repository the diff was taken from.
    #[arg(value_name = "REPO")]
    pub repo: PathBuf,

    /// Patch file to check. Reads stdin when omitted or `-`.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Also report interfaces whose changes came with a new IID.
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Print debugging information while running.
    #[arg(short, long)]
    pub debug: bool,

    /// Disable colored output.
    #[arg(short = 'n', long)]
    pub no_color: bool,

    /// Compare the produced errors against a reference output file.
    #[arg(short = 't', long = "test", value_name = "REFERENCE")]
    pub test: Option<PathBuf>,

    /// Config file to use instead of `<REPO>/.iidcheck.yaml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit the report as JSON.
    #[arg(long, conflicts_with = "test")]
    pub json: bool,

    /// Print version.
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The patch path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
