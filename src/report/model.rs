//! The report model built from an analysis, and its message texts.

use serde::Serialize;

use crate::analyze::Analysis;

/// One interface together with the IDL file that defines it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceVerdict {
    pub interface: String,
    pub file: String,
}

impl InterfaceVerdict {
    fn new(interface: &str, analysis: &Analysis) -> Self {
        Self {
            interface: interface.to_string(),
            // Every required interface is mapped during traversal.
            file: analysis.file_of(interface).unwrap_or_default().to_string(),
        }
    }

    pub fn needs_new_iid_message(&self) -> String {
        format!(
            "Interface '{}', in file '{}' needs a new IID",
            self.interface, self.file
        )
    }

    pub fn looks_good_message(&self) -> String {
        format!(
            "Interface '{}' has changes and a modified IID. Looks good.",
            self.interface
        )
    }
}

/// The outcome of one run, ready to be rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Interfaces that changed without a new IID, in patch order.
    pub unrevved: Vec<InterfaceVerdict>,
    /// Interfaces that changed and did get a new IID.
    pub revved: Vec<InterfaceVerdict>,
    /// IDL file names missing from the local repository.
    pub missing_files: Vec<String>,
}

impl Report {
    /// Partition the required interfaces into revved and unrevved.
    pub fn from_analysis(analysis: &Analysis) -> Self {
        Self {
            unrevved: analysis
                .unrevved()
                .map(|name| InterfaceVerdict::new(name, analysis))
                .collect(),
            revved: analysis
                .revved()
                .map(|name| InterfaceVerdict::new(name, analysis))
                .collect(),
            missing_files: analysis.missing_files.iter().cloned().collect(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.unrevved.is_empty()
    }

    /// The error messages without their `ERROR:` prefix.
    ///
    /// These are the lines the self-test compares against a reference file.
    pub fn error_messages(&self) -> Vec<String> {
        self.unrevved
            .iter()
            .map(InterfaceVerdict::needs_new_iid_message)
            .collect()
    }
}

pub(super) fn missing_file_message(file: &str) -> String {
    format!(
        "'{file}' was not found in local repository. Are you sure your repository is at the correct revision?"
    )
}
