//! Mutable traversal state owned by the driver.

use crate::diff::IdlFileHeader;

/// Which kind of file the patch cursor is in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) enum FileContext {
    /// Before the first file header.
    #[default]
    AwaitingFile,
    /// Inside an IDL file that is analyzed.
    Idl(IdlFileHeader),
    /// Inside a file whose hunks are ignored: not IDL, excluded, or deleted.
    Skipped,
}

/// Cross-line context carried from one patch line to the next.
#[derive(Debug, Default)]
pub(super) struct TraversalState {
    pub file: FileContext,
    pub current_interface: Option<String>,
    pub previous_interface: Option<String>,
    /// The next interface definition line names the current interface.
    pub need_interface_name: bool,
    /// An IID addition was seen; the next captured interface is revved.
    pub found_iid_change: bool,
    /// An IID removal was seen with no addition since.
    pub interface_may_be_removed: bool,
    /// Pre-patch line of the last IID removal; lower bound of rename windows.
    pub last_iid_removal_line: Option<i64>,
    pub current_interface_renamed: bool,
    /// Requirement of a removed definition line, held back until the next
    /// line shows whether the interface was renamed.
    pub deferred_requirement: Option<String>,
}

impl TraversalState {
    /// Enter a new file: forget everything tied to the previous one.
    pub fn enter_file(&mut self, file: FileContext) {
        self.file = file;
        self.need_interface_name = true;
        self.previous_interface = self.current_interface.take();
        self.found_iid_change = false;
        self.interface_may_be_removed = false;
        self.last_iid_removal_line = None;
        self.current_interface_renamed = false;
    }

    /// Make `name` the current interface. Moving to a different interface
    /// ends the effect of an earlier rename.
    pub fn switch_interface(&mut self, name: String) {
        if self.current_interface.as_deref() != Some(name.as_str()) {
            self.current_interface_renamed = false;
        }
        self.current_interface = Some(name);
    }

    /// Require the next definition line to name the current interface.
    pub fn forget_interface(&mut self) {
        self.need_interface_name = true;
        self.previous_interface = self.current_interface.take();
    }

    pub fn idl_file(&self) -> Option<&IdlFileHeader> {
        match &self.file {
            FileContext::Idl(header) => Some(header),
            _ => None,
        }
    }

    pub fn is_skipping(&self) -> bool {
        !matches!(self.file, FileContext::Idl(_))
    }
}
