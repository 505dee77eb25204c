//! The upward directory walk at the heart of discovery.

use super::Discovery;
use crate::fs::EntryKind;

/// How a walk ended.
///
/// The walk is strictly monotonic: starting from a directory it either finds
/// an admin-directory entry at some ancestor, refuses because the starting
/// point is itself inside an admin directory, or exhausts its candidates
/// (drive root, bare UNC share root, or a bare repository on the way up).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkOutcome {
    /// An ancestor (or the start itself) carries an admin-directory entry.
    WorkingTree { top_dir: String },
    /// The starting directory lies inside an admin directory; such paths are
    /// metadata, never working-copy content.
    InsideAdminDir,
    /// No admin directory governs this path.
    NoRepository,
}

impl<'fs> Discovery<'fs> {
    /// Walk upward from `path`, auto-detecting whether it is a directory.
    pub fn locate(&self, path: &str) -> WalkOutcome {
        let is_dir = self.fs().entry_kind(path).is_dir();
        self.locate_with_hint(path, is_dir)
    }

    /// Walk upward from `path`. `is_dir` tells the walk whether to start at
    /// `path` itself or at its parent; callers probing a file (or a path
    /// that does not exist yet) pass `false`.
    pub fn locate_with_hint(&self, path: &str, is_dir: bool) -> WalkOutcome {
        if path.is_empty() {
            return WalkOutcome::NoRepository;
        }
        let style = self.style();
        let mut dir: String;
        if is_dir {
            dir = path.to_string();
        } else {
            // A non-directory this short (e.g. "C:\") has no usable parent.
            if path.len() <= 3 {
                return WalkOutcome::NoRepository;
            }
            dir = match style.last_separator(path) {
                Some(i) => path[..i].to_string(),
                None => String::new(),
            };
        }

        // A .git dir or anything inside it is left out; discovery only cares
        // about working-copy paths. Rejected before any filesystem probe.
        if style.has_admin_dir_component(&dir, self.admin_dir_name()) {
            return WalkOutcome::InsideAdminDir;
        }

        loop {
            if dir.is_empty() {
                return WalkOutcome::NoRepository;
            }
            let probe = style.join(&dir, self.admin_dir_name());
            if self.fs().entry_kind(&probe).exists() {
                // Root paths like "C:" need their trailing separator back.
                if style.is_drive_root(&dir) {
                    dir = style.ensure_trailing_separator(&dir);
                }
                return WalkOutcome::WorkingTree { top_dir: dir };
            }
            if self.is_bare_repo(&dir) {
                return WalkOutcome::NoRepository;
            }
            match style.last_separator(&dir) {
                // Stopping below index 2 keeps the walk from climbing above
                // a drive letter.
                Some(i) if i >= 2 => dir.truncate(i),
                _ => return WalkOutcome::NoRepository,
            }
            // Don't check for \\COMPUTERNAME\.git
            if style.is_unc_share_root(&dir) {
                return WalkOutcome::NoRepository;
            }
        }
    }

    /// True if an admin directory governs `path`.
    pub fn has_admin_dir(&self, path: &str) -> bool {
        matches!(self.locate(path), WalkOutcome::WorkingTree { .. })
    }

    /// The working-tree root governing `path`, if any.
    pub fn top_dir(&self, path: &str) -> Option<String> {
        match self.locate(path) {
            WalkOutcome::WorkingTree { top_dir } => Some(top_dir),
            _ => None,
        }
    }

    /// True if `path` is inside a working tree or is itself a bare
    /// repository.
    pub fn is_working_tree_or_bare_repo(&self, path: &str) -> bool {
        self.has_admin_dir(path) || self.is_bare_repo(path)
    }

    /// True if `path` has the admin-directory name as its final component or
    /// as any intermediate component. Purely lexical; the filesystem is not
    /// consulted.
    pub fn is_admin_dir_path(&self, path: &str) -> bool {
        !path.is_empty()
            && self
                .style()
                .has_admin_dir_component(path, self.admin_dir_name())
    }

    pub(crate) fn admin_entry_exists(&self, dir: &str) -> bool {
        let probe = self.style().join(dir, self.admin_dir_name());
        self.fs().entry_kind(&probe) != EntryKind::Missing
    }
}
