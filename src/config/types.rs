//! Configuration types and defaults for iidcheck.

use serde::{Deserialize, Serialize};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Use colors if stdout is a TTY and `NO_COLOR` is not set.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve the mode against the current environment.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

/// One IDL member attribute as it appears in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorSpec {
    /// Attribute token, e.g. `notxpcom`.
    pub token: String,

    /// Whether adding or removing the attribute changes the binary layout.
    #[serde(default = "default_true")]
    pub affects_binary_compat: bool,
}

impl DescriptorSpec {
    pub fn new(token: impl Into<String>, affects_binary_compat: bool) -> Self {
        Self {
            token: token.into(),
            affects_binary_compat,
        }
    }
}

/// The attributes recognized out of the box. All of them change the vtable.
pub fn default_descriptors() -> Vec<DescriptorSpec> {
    vec![
        DescriptorSpec::new("implicit_jscontext", true),
        DescriptorSpec::new("nostdcall", true),
        DescriptorSpec::new("notxpcom", true),
        DescriptorSpec::new("optional_argc", true),
    ]
}

pub(super) fn default_true() -> bool {
    true
}
