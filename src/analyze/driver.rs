//! The patch-walking state machine.

use globset::GlobSet;
use std::path::{Path, PathBuf};

use super::cursor::LineCursor;
use super::result::Analysis;
use super::state::{FileContext, TraversalState};
use crate::descriptors::DescriptorRegistry;
use crate::diff;
use crate::source::SourceTree;

/// Signals computed for one changed line.
#[derive(Debug, Clone, Copy, Default)]
struct LineFacts {
    change: bool,
    comment: bool,
    constant: bool,
    descriptor: bool,
    binary_compat: bool,
    iid_removal: bool,
}

/// Streaming analyzer: feed patch lines in order, then call [`PatchAnalyzer::finish`].
pub struct PatchAnalyzer<'a> {
    registry: &'a DescriptorRegistry,
    root: PathBuf,
    excludes: GlobSet,
    sources: SourceTree,
    cursor: LineCursor,
    state: TraversalState,
    analysis: Analysis,
    patch_line: usize,
}

impl<'a> PatchAnalyzer<'a> {
    /// Create an analyzer resolving patch paths against `root`.
    pub fn new(root: impl Into<PathBuf>, registry: &'a DescriptorRegistry) -> Self {
        Self {
            registry,
            root: root.into(),
            excludes: GlobSet::empty(),
            sources: SourceTree::new(),
            cursor: LineCursor::default(),
            state: TraversalState::default(),
            analysis: Analysis::default(),
            patch_line: 0,
        }
    }

    /// Skip IDL files whose repository-relative path matches `excludes`.
    pub fn with_excludes(mut self, excludes: GlobSet) -> Self {
        self.excludes = excludes;
        self
    }

    /// Consume one patch line.
    pub fn feed_line(&mut self, line: &str) {
        self.patch_line += 1;
        self.cursor.advance(line);

        if let Some(path) = diff::new_file_path(line) {
            self.flush_deferred();
            self.enter_file(line, &path);
            return;
        }

        if diff::is_addition_line(line) {
            self.state.interface_may_be_removed = false;
        }

        if self.state.current_interface.is_none() {
            self.state.need_interface_name = true;
        }

        if diff::signifies_creation(line) {
            tracing::debug!(patch_line = self.patch_line, "file created by the patch");
        }

        if diff::signifies_deletion(line) {
            tracing::debug!(patch_line = self.patch_line, "file deleted by the patch");
            self.state.file = FileContext::Skipped;
        }

        if self.state.is_skipping() {
            return;
        }

        if diff::is_blank_change(line) {
            tracing::trace!(patch_line = self.patch_line, "blank change skipped");
            return;
        }

        let deferred = self.state.deferred_requirement.take();
        let mut renamed_here = false;

        self.track_iid(line);

        if diff::is_interface_definition_line(line) {
            renamed_here = self.track_definition(line);
        }

        if let Some(name) = deferred {
            if !renamed_here {
                self.require(name);
            }
        }

        if diff::is_context_line(line) {
            self.enter_hunk(line);
        }

        let facts = self.classify(line);

        if facts.iid_removal {
            self.state.last_iid_removal_line = Some(self.cursor.line());
        }

        self.apply_verdict(line, facts);

        if diff::is_end_of_interface_removal(line) && self.state.interface_may_be_removed {
            self.retract_removed_interface();
        }
    }

    /// Finish the traversal and hand out the result sets.
    pub fn finish(mut self) -> Analysis {
        self.flush_deferred();
        self.analysis
    }

    fn enter_file(&mut self, line: &str, relative_path: &str) {
        let context = match diff::parse_idl_file_start(line, &self.root) {
            Some(_) if self.excludes.is_match(relative_path) => {
                tracing::debug!(path = relative_path, "IDL file excluded by config");
                FileContext::Skipped
            }
            Some(header) => {
                tracing::debug!(
                    patch_line = self.patch_line,
                    file = %header.name,
                    "start of IDL file"
                );
                FileContext::Idl(header)
            }
            None => {
                tracing::debug!(patch_line = self.patch_line, path = relative_path, "start of non-IDL file");
                FileContext::Skipped
            }
        };

        self.state.enter_file(context);
        tracing::trace!(previous = ?self.state.previous_interface, "left interface");
    }

    fn enter_hunk(&mut self, line: &str) {
        self.cursor.reset(diff::hunk_start_line(line));

        if let Some(name) = diff::context_interface_name(line) {
            tracing::debug!(patch_line = self.patch_line, interface = name, "interface from hunk header");
            self.state.switch_interface(name.to_string());
            self.map_interface(name);
        }
    }

    fn track_iid(&mut self, line: &str) {
        if diff::is_iid_addition(line) {
            self.state.forget_interface();
            self.state.found_iid_change = true;
        } else if diff::is_iid_line(line) {
            if diff::is_removal_line(line) {
                self.state.interface_may_be_removed = true;
            }
            self.state.forget_interface();
            self.state.found_iid_change = false;
        }
    }

    /// Handle an interface definition line. Returns true when it renames the
    /// interface the cursor was in.
    fn track_definition(&mut self, line: &str) -> bool {
        let Some(name) = diff::definition_interface_name(line) else {
            return false;
        };
        let name = name.to_string();

        if self.state.need_interface_name {
            tracing::debug!(patch_line = self.patch_line, interface = %name, "interface captured");
            if self.state.found_iid_change {
                self.analysis.revved_interfaces.insert(name.clone());
                self.state.found_iid_change = false;
            }
            self.state.need_interface_name = false;
            self.map_interface(&name);
            self.state.switch_interface(name);
            return false;
        }

        let Some(old) = self.state.current_interface.clone() else {
            return false;
        };
        if old == name {
            return false;
        }

        let renamed = self.is_rename(&old);
        if renamed {
            tracing::debug!(patch_line = self.patch_line, from = %old, to = %name, "interface renamed");
            self.state.current_interface_renamed = true;
            if self.analysis.revved_interfaces.contains(&old) {
                self.analysis.revved_interfaces.insert(name.clone());
            }
        }

        self.map_interface(&name);
        self.state.previous_interface = Some(old);
        self.state.current_interface = Some(name);
        renamed
    }

    /// The old name no longer appearing in the on-disk file means the
    /// interface was renamed. After an IID removal only the lines between that
    /// removal and the cursor are searched; otherwise the whole file is.
    fn is_rename(&mut self, old: &str) -> bool {
        let Some(header) = self.state.idl_file() else {
            return false;
        };
        let (path, file_name) = (header.path.clone(), header.name.clone());

        let start = self.state.last_iid_removal_line;
        let end = self.cursor.line() + 1;
        let mentioned = self.sources.get(&path).map(|file| match start {
            Some(start) => file.mentions(old, start, end),
            None => file.mentions_anywhere(old),
        });

        match mentioned {
            Some(found) => !found,
            None => {
                self.note_missing(file_name);
                false
            }
        }
    }

    fn classify(&mut self, line: &str) -> LineFacts {
        let change = diff::is_change_line(line);
        let comment = change && self.is_comment(line);

        LineFacts {
            change,
            comment,
            constant: diff::is_constant_expression(line),
            descriptor: self.registry.has_descriptor(line),
            binary_compat: self.registry.affects_binary_compat(line),
            iid_removal: diff::is_iid_removal(line),
        }
    }

    fn is_comment(&mut self, line: &str) -> bool {
        if diff::is_single_line_comment(line) {
            return true;
        }

        let Some(header) = self.state.idl_file() else {
            return false;
        };
        let (path, file_name) = (header.path.clone(), header.name.clone());

        let line_no = self.cursor.line();
        match self.sources.get(&path) {
            Some(file) => diff::is_comment_line(line, line_no, Some(file)),
            None => {
                self.note_missing(file_name);
                false
            }
        }
    }

    fn apply_verdict(&mut self, line: &str, facts: LineFacts) {
        let LineFacts {
            change,
            comment,
            constant,
            descriptor,
            binary_compat,
            iid_removal,
        } = facts;

        let qualifies = binary_compat
            || (!self.state.current_interface_renamed
                && !descriptor
                && !iid_removal
                && !comment
                && !constant
                && change);
        if !qualifies {
            return;
        }

        let Some(name) = self.state.current_interface.clone() else {
            return;
        };

        tracing::debug!(
            patch_line = self.patch_line,
            interface = %name,
            binary_compat,
            renamed = self.state.current_interface_renamed,
            comment,
            iid_removal,
            constant,
            "change requires a new IID"
        );

        if !binary_compat
            && diff::is_removal_line(line)
            && diff::is_interface_definition_line(line)
        {
            self.state.deferred_requirement = Some(name);
            return;
        }

        self.require(name);
    }

    fn retract_removed_interface(&mut self) {
        let Some(name) = self.state.current_interface.as_deref() else {
            return;
        };

        if self.analysis.interfaces_requiring_new_iid.shift_remove(name) {
            tracing::debug!(patch_line = self.patch_line, interface = name, "interface removed entirely");
            self.state.interface_may_be_removed = false;
        }
    }

    fn flush_deferred(&mut self) {
        if let Some(name) = self.state.deferred_requirement.take() {
            self.require(name);
        }
    }

    fn require(&mut self, name: String) {
        self.analysis.interfaces_requiring_new_iid.insert(name);
    }

    fn map_interface(&mut self, name: &str) {
        if let Some(header) = self.state.idl_file() {
            let file_name = header.name.clone();
            self.analysis
                .interface_files
                .insert(name.to_string(), file_name);
        }
    }

    fn note_missing(&mut self, file_name: String) {
        if self.analysis.missing_files.insert(file_name.clone()) {
            tracing::debug!(
                file = %file_name,
                "IDL file not found in local repository; comment and rename detection disabled"
            );
        }
    }
}

/// Analyze a whole patch held in memory, skipping IDL files matched by `excludes`.
pub fn analyze_patch(
    patch: &str,
    root: &Path,
    registry: &DescriptorRegistry,
    excludes: GlobSet,
) -> Analysis {
    let mut analyzer = PatchAnalyzer::new(root, registry).with_excludes(excludes);
    for line in patch.lines() {
        analyzer.feed_line(line);
    }
    analyzer.finish()
}
