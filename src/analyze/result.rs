//! The verdict sets produced by one traversal.

use indexmap::{IndexMap, IndexSet};

/// Everything the traversal learned about the patch.
///
/// All collections keep first-insertion order so reports follow the patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Interfaces whose changes obligate an IID bump.
    pub interfaces_requiring_new_iid: IndexSet<String>,
    /// Interfaces that did receive an IID change.
    pub revved_interfaces: IndexSet<String>,
    /// Interface name to the file name of the IDL file defining it.
    pub interface_files: IndexMap<String, String>,
    /// IDL file names that could not be read from the source tree.
    pub missing_files: IndexSet<String>,
}

impl Analysis {
    /// Interfaces that need a new IID but did not get one.
    pub fn unrevved(&self) -> impl Iterator<Item = &str> {
        self.interfaces_requiring_new_iid
            .iter()
            .filter(|name| !self.revved_interfaces.contains(*name))
            .map(String::as_str)
    }

    /// Interfaces that needed a new IID and got one.
    pub fn revved(&self) -> impl Iterator<Item = &str> {
        self.interfaces_requiring_new_iid
            .iter()
            .filter(|name| self.revved_interfaces.contains(*name))
            .map(String::as_str)
    }

    /// The IDL file name owning `interface`, if it was seen.
    pub fn file_of(&self, interface: &str) -> Option<&str> {
        self.interface_files.get(interface).map(String::as_str)
    }

    pub fn is_clean(&self) -> bool {
        self.unrevved().next().is_none()
    }
}
