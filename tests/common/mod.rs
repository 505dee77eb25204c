#![allow(dead_code)] // not every test crate uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Repository fixture built from marker files alone.
///
/// Discovery only inspects layout (`.git` entries, bare markers,
/// `.gitmodules`), so tests fabricate exactly that instead of shelling out
/// to a git binary.
pub struct FakeRepo {
    temp_dir: TempDir,
}

impl Default for FakeRepo {
    fn default() -> Self {
        Self::empty()
    }
}

impl FakeRepo {
    /// A plain directory with no repository markers at all.
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().unwrap();
        Self { temp_dir }
    }

    /// A normal working tree: `.git` directory with the standard metadata
    /// children.
    pub fn working_tree() -> Self {
        let repo = Self::empty();
        init_working_tree(repo.path());
        repo
    }

    /// A bare repository: HEAD, config, objects, refs directly at the root.
    pub fn bare() -> Self {
        let repo = Self::empty();
        init_bare(repo.path());
        repo
    }

    /// A linked working tree: `.git` is a gitlink file with the given
    /// payload.
    pub fn linked(gitlink_payload: &str) -> Self {
        let repo = Self::empty();
        fs::write(repo.path().join(".git"), gitlink_payload).unwrap();
        repo
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path_str(&self) -> &str {
        self.temp_dir.path().to_str().unwrap()
    }

    pub fn join_str(&self, child: &str) -> String {
        self.temp_dir
            .path()
            .join(child)
            .to_str()
            .unwrap()
            .to_string()
    }

    pub fn mkdir(&self, child: &str) -> PathBuf {
        let dir = self.path().join(child);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn write(&self, child: &str, contents: &str) -> PathBuf {
        let file = self.path().join(child);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&file, contents).unwrap();
        file
    }
}

/// Lay down a `.git` directory with the standard metadata children.
pub fn init_working_tree(root: &Path) {
    let git = root.join(".git");
    fs::create_dir_all(git.join("objects")).unwrap();
    fs::create_dir_all(git.join("refs")).unwrap();
    fs::write(git.join("HEAD"), "ref: refs/heads/main\n").unwrap();
    fs::write(git.join("config"), "[core]\n\tbare = false\n").unwrap();
}

/// Lay down bare-repository markers directly in `root`.
pub fn init_bare(root: &Path) {
    fs::create_dir_all(root.join("objects")).unwrap();
    fs::create_dir_all(root.join("refs")).unwrap();
    fs::write(root.join("HEAD"), "ref: refs/heads/main\n").unwrap();
    fs::write(root.join("config"), "[core]\n\tbare = true\n").unwrap();
}
