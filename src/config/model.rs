//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for an iidcheck run.
///
/// This struct represents the contents of `.iidcheck.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Descriptor settings
    // =========================================================================
    /// IDL member attributes recognized by the classifier.
    #[serde(default = "default_descriptors")]
    pub descriptors: Vec<DescriptorSpec>,

    /// Only count a descriptor as compatibility-affecting when the attribute
    /// actually present on the line is flagged as such.
    ///
    /// Off by default: any recognized descriptor on a line counts as soon as
    /// some registered descriptor affects binary compatibility.
    #[serde(default)]
    pub strict_descriptor_compat: bool,

    // =========================================================================
    // Scope settings
    // =========================================================================
    /// Glob patterns (repository-relative) of IDL files to skip.
    #[serde(default)]
    pub exclude_paths: Vec<String>,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// Terminal color mode.
    #[serde(default)]
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            descriptors: default_descriptors(),
            strict_descriptor_compat: false,
            exclude_paths: Vec::new(),
            color: ColorMode::default(),
        }
    }
}
