use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway repository root holding IDL sources at their post-patch state.
pub(crate) struct IdlTree {
    dir: TempDir,
}

impl IdlTree {
    pub(crate) fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `relative_path`, creating parent directories.
    pub(crate) fn write(&self, relative_path: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("failed to create {}: {}", parent.display(), e));
        }
        std::fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
        path
    }
}

/// `nsIFoo` in `xpcom/foo.idl` with `[notxpcom] long getValue();` already added.
pub(crate) const FOO_IDL: &str = "\
/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. */

#include \"nsISupports.idl\"

[scriptable, uuid(00000000-0000-0000-0000-000000000001)]
interface nsIFoo : nsISupports {
  long getOther();
  [notxpcom] long getValue();
};
";
