//! Gitlink indirection files.
//!
//! Linked worktrees and checked-out submodules replace the `.git` directory
//! with a one-line text file (`gitdir: <path>`) pointing at the real admin
//! directory. Resolution is tolerant by design: anything unreadable or
//! malformed degrades to "not found" rather than an error.

use super::Discovery;

/// Gitlink payloads are a single short line; anything larger is malformed.
const GITLINK_MAX_BYTES: usize = 65536;

/// The mandatory prefix of a gitlink file, checked on the raw bytes.
const GITLINK_PREFIX: &[u8] = b"gitdir: ";

impl<'fs> Discovery<'fs> {
    /// Parse the gitlink file at `gitlink_path` and return the admin
    /// directory it points to.
    ///
    /// Relative targets (those starting with `.`) are resolved against
    /// `working_tree_root` and lexically canonicalized; absolute targets are
    /// returned as written, with forward slashes converted to the profile
    /// separator and trailing separators stripped. Returns `None` for
    /// missing, unreadable, or unprefixed content, and when `gitlink_path`
    /// is a directory.
    pub fn read_git_link(&self, working_tree_root: &str, gitlink_path: &str) -> Option<String> {
        let bytes = self.fs().read_at_most(gitlink_path, GITLINK_MAX_BYTES).ok()?;
        if bytes.len() < GITLINK_PREFIX.len() || !bytes.starts_with(GITLINK_PREFIX) {
            return None;
        }
        // The prefix check above is pure ASCII; decode the whole payload as
        // UTF-8 so non-ASCII target paths survive intact. Trim before
        // stripping the prefix, matching the original's order.
        let text = String::from_utf8_lossy(&bytes);
        let target = text.trim();
        let target = target.get(GITLINK_PREFIX.len()..).unwrap_or("");

        let style = self.style();
        let converted = style.convert_slashes(target);
        let path = style.strip_trailing_separators(&converted);
        if path.is_empty() {
            return None;
        }
        if path.starts_with('.') {
            let joined = style.join(working_tree_root, path);
            Some(style.lexical_canonicalize(&joined))
        } else {
            Some(path.to_string())
        }
    }

    /// The admin directory governing `working_tree_root`, always returned
    /// with exactly one trailing separator.
    ///
    /// A bare repository is its own admin directory; otherwise the `.git`
    /// child is used directly if it is a directory, or resolved through
    /// [`Self::read_git_link`] if it is a file.
    pub fn admin_dir_path(&self, working_tree_root: &str) -> Option<String> {
        let style = self.style();
        if self.is_bare_repo(working_tree_root) {
            return Some(style.ensure_trailing_separator(working_tree_root));
        }

        let dot_git = style.join(working_tree_root, self.admin_dir_name());
        if self.fs().entry_kind(&dot_git).is_dir() {
            return Some(style.ensure_trailing_separator(&dot_git));
        }

        let target = self.read_git_link(working_tree_root, &dot_git)?;
        Some(format!("{}{}", target, style.separator()))
    }
}
