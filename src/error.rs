//! Error types for the iidcheck CLI.
//!
//! Uses thiserror for derive macros. Irregular patch or source input never
//! ends up here: the analysis degrades to documented defaults instead.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for iidcheck operations.
#[derive(Error, Debug)]
pub enum IidError {
    /// User provided invalid arguments or an unusable input file.
    #[error("{0}")]
    UserError(String),

    /// Reading the patch or the reference file failed.
    #[error("failed to read '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be parsed or is invalid.
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// One or more interfaces changed without a new IID.
    #[error("{count} interface(s) need a new IID")]
    MissingIid { count: usize },

    /// Self-test output did not match the reference file.
    #[error("self-test failed: {0}")]
    SelfTestMismatch(String),
}

impl IidError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            IidError::UserError(_) | IidError::IoError { .. } | IidError::ConfigError(_) => {
                exit_codes::USER_ERROR
            }
            IidError::MissingIid { .. } => exit_codes::IID_VIOLATION,
            IidError::SelfTestMismatch(_) => exit_codes::SELF_TEST_FAILURE,
        }
    }

    /// Wrap an I/O failure together with the path that caused it.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        IidError::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for iidcheck operations.
pub type Result<T> = std::result::Result<T, IidError>;
