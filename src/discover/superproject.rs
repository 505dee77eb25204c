//! Superproject lookup: is this working tree a submodule of another
//! repository?

use super::{Discovery, GITMODULES_FILE};

impl<'fs> Discovery<'fs> {
    /// Walk upward from `path` and return the root of the superproject that
    /// declares it as a submodule, if there is one.
    ///
    /// The walk stops at the nearest ancestor carrying an admin-directory
    /// entry: if that ancestor also carries a `.gitmodules` manifest it is
    /// the superproject; if not, no ancestor further up can be one, since
    /// the nearer repository already encloses `path`.
    pub fn super_project_root(&self, path: &str) -> Option<String> {
        let style = self.style();
        let mut root = path.to_string();

        loop {
            if self.admin_entry_exists(&root) {
                let manifest = style.join(&root, GITMODULES_FILE);
                if self.fs().entry_kind(&manifest).exists() {
                    return Some(root);
                }
                return None;
            }

            match style.last_separator(&root) {
                Some(i) => root.truncate(i),
                None => root.clear(),
            }
            // Don't check for \\COMPUTERNAME\.git
            if style.is_unc_share_root(&root) {
                return None;
            }
            // The walk floor: never probe the last two levels above the
            // filesystem root.
            match style.last_separator(&root) {
                Some(i) if i > 0 => {}
                _ => return None,
            }
        }
    }
}
