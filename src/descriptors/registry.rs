//! Descriptor tokens and the registry that matches them against diff lines.

use crate::config::{Config, DescriptorSpec};
use regex::Regex;
use std::sync::LazyLock;

/// `+ [a, b] rest` or `- [a]`: a diff marker, then a bracketed attribute list.
static ATTRIBUTE_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[+-]\s*\[([^\]]*)\]").expect("valid attribute regex"));

/// Extract the raw attribute list of a changed IDL member line.
///
/// Returns the text between the brackets, or `None` when the line carries no
/// diff marker or no bracketed list right after it.
pub fn attribute_list(line: &str) -> Option<&str> {
    ATTRIBUTE_LIST
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// A single recognized IDL attribute. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdlDescriptor {
    token: String,
    affects_binary_compat: bool,
}

impl IdlDescriptor {
    pub fn new(token: impl Into<String>, affects_binary_compat: bool) -> Self {
        Self {
            token: token.into(),
            affects_binary_compat,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn affects_binary_compat(&self) -> bool {
        self.affects_binary_compat
    }

    /// Whether this descriptor appears in the attribute list of `line`.
    pub fn is_in_line(&self, line: &str) -> bool {
        let Some(attrs) = attribute_list(line) else {
            return false;
        };
        attrs.split(',').map(str::trim).any(|attr| {
            tracing::trace!(attr, "found attribute");
            attr == self.token
        })
    }
}

impl From<&DescriptorSpec> for IdlDescriptor {
    fn from(spec: &DescriptorSpec) -> Self {
        Self::new(spec.token.clone(), spec.affects_binary_compat)
    }
}

/// The fixed catalog of descriptors for one run.
#[derive(Debug, Clone)]
pub struct DescriptorRegistry {
    descriptors: Vec<IdlDescriptor>,
    strict: bool,
}

impl Default for DescriptorRegistry {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl DescriptorRegistry {
    pub fn new(descriptors: Vec<IdlDescriptor>) -> Self {
        Self {
            descriptors,
            strict: false,
        }
    }

    /// Build the registry from the configured descriptor list.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.descriptors.iter().map(IdlDescriptor::from).collect())
            .with_strict_compat(config.strict_descriptor_compat)
    }

    /// Check only the attributes present on the line when deciding
    /// compatibility (see [`DescriptorRegistry::affects_binary_compat`]).
    pub fn with_strict_compat(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn descriptors(&self) -> &[IdlDescriptor] {
        &self.descriptors
    }

    /// Whether any registered descriptor appears on `line`.
    pub fn has_descriptor(&self, line: &str) -> bool {
        self.descriptors().iter().any(|desc| desc.is_in_line(line))
    }

    /// Whether the descriptors on `line` affect binary compatibility.
    ///
    /// By default this is true as soon as the line carries any registered
    /// descriptor and the registry holds at least one compatibility-affecting
    /// descriptor, whichever attribute actually matched. In strict mode only
    /// the attributes present on the line are consulted.
    pub fn affects_binary_compat(&self, line: &str) -> bool {
        if !self.has_descriptor(line) {
            return false;
        }

        let found = if self.strict {
            self.descriptors()
                .iter()
                .find(|desc| desc.affects_binary_compat() && desc.is_in_line(line))
        } else {
            self.descriptors()
                .iter()
                .find(|desc| desc.affects_binary_compat())
        };

        match found {
            Some(desc) => {
                tracing::debug!(token = desc.token(), "descriptor affects binary compatibility");
                true
            }
            None => {
                tracing::debug!("no descriptors found affecting binary compatibility");
                false
            }
        }
    }
}
