//! Bare-repository classification.

use super::Discovery;
use crate::fs::EntryKind;

impl<'fs> Discovery<'fs> {
    /// True iff `path` is a bare repository.
    ///
    /// All four markers are mandatory: `HEAD` and `config` files plus
    /// `objects` and `refs` directories. No partial-match heuristic and no
    /// content parsing. Admin-directory paths never qualify: a `.git`
    /// folder inside a working tree carries the same markers but is
    /// metadata, not a bare repository.
    pub fn is_bare_repo(&self, path: &str) -> bool {
        if path.is_empty() {
            return false;
        }
        if self.is_admin_dir_path(path) {
            return false;
        }
        // Don't check for \\COMPUTERNAME\HEAD
        if self.style().is_unc_share_root(path) {
            return false;
        }

        let style = self.style();
        let file_marker = |name: &str| {
            self.fs().entry_kind(&style.join(path, name)) == EntryKind::File
        };
        let dir_marker = |name: &str| {
            self.fs().entry_kind(&style.join(path, name)) == EntryKind::Dir
        };

        file_marker("HEAD") && file_marker("config") && dir_marker("objects") && dir_marker("refs")
    }
}
