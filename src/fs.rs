use std::collections::HashMap;
use std::io::{self, Read};
use std::path::Path;

use crate::platform::PathStyle;

/// What a probed path resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Missing,
    File,
    Dir,
}

impl EntryKind {
    pub fn exists(self) -> bool {
        self != EntryKind::Missing
    }

    pub fn is_dir(self) -> bool {
        self == EntryKind::Dir
    }
}

/// Filesystem probes used by discovery.
///
/// Discovery performs only existence checks and one bounded read (for
/// gitlink files), so this is the whole surface. Injecting it keeps the walk
/// algorithm deterministic under test: [`MemoryFileSystem`] can model
/// Windows-only layouts (drive letters, UNC shares) on any host.
pub trait FileSystem {
    /// Classify `path`. Never fails; unreadable or invalid paths are
    /// `Missing`.
    fn entry_kind(&self, path: &str) -> EntryKind;

    /// Read at most `limit` bytes from a regular file. Directories are an
    /// error. The handle must not be held beyond the single read and must
    /// not exclude concurrent writers.
    fn read_at_most(&self, path: &str, limit: usize) -> io::Result<Vec<u8>>;
}

/// The real filesystem, probed via `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn entry_kind(&self, path: &str) -> EntryKind {
        match std::fs::metadata(Path::new(path)) {
            Ok(meta) if meta.is_dir() => EntryKind::Dir,
            Ok(_) => EntryKind::File,
            Err(_) => EntryKind::Missing,
        }
    }

    fn read_at_most(&self, path: &str, limit: usize) -> io::Result<Vec<u8>> {
        // std::fs::File opens with full sharing on Windows, so a concurrent
        // git process rewriting the file does not make this fail.
        let file = std::fs::File::open(Path::new(path))?;
        if file.metadata()?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "expected a file, found a directory",
            ));
        }
        let mut buffer = Vec::new();
        file.take(limit as u64).read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}

enum Node {
    File(Vec<u8>),
    Dir,
}

/// In-memory fake filesystem for unit tests.
///
/// Paths are stored under the given [`PathStyle`], so Windows semantics
/// (backslash separators, case-insensitive lookups) are testable on any
/// host. Adding an entry implicitly creates its ancestor directories.
pub struct MemoryFileSystem {
    style: PathStyle,
    entries: HashMap<String, Node>,
}

impl MemoryFileSystem {
    pub fn new(style: PathStyle) -> Self {
        Self {
            style,
            entries: HashMap::new(),
        }
    }

    fn key(&self, path: &str) -> String {
        let stripped = self.style.strip_trailing_separators(path);
        match self.style {
            PathStyle::Windows => stripped.to_ascii_lowercase(),
            PathStyle::Posix => stripped.to_string(),
        }
    }

    fn add_ancestors(&mut self, path: &str) {
        let mut current = self.style.strip_trailing_separators(path).to_string();
        while let Some(i) = self.style.last_separator(&current) {
            current.truncate(i);
            if current.is_empty() {
                break;
            }
            let key = self.key(&current);
            self.entries.entry(key).or_insert(Node::Dir);
        }
    }

    pub fn add_dir(&mut self, path: &str) -> &mut Self {
        self.add_ancestors(path);
        self.entries.insert(self.key(path), Node::Dir);
        self
    }

    pub fn add_file(&mut self, path: &str, contents: impl Into<Vec<u8>>) -> &mut Self {
        self.add_ancestors(path);
        self.entries
            .insert(self.key(path), Node::File(contents.into()));
        self
    }

    pub fn remove(&mut self, path: &str) -> &mut Self {
        let key = self.key(path);
        self.entries.remove(&key);
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn entry_kind(&self, path: &str) -> EntryKind {
        match self.entries.get(&self.key(path)) {
            Some(Node::File(_)) => EntryKind::File,
            Some(Node::Dir) => EntryKind::Dir,
            None => EntryKind::Missing,
        }
    }

    fn read_at_most(&self, path: &str, limit: usize) -> io::Result<Vec<u8>> {
        match self.entries.get(&self.key(path)) {
            Some(Node::File(contents)) => Ok(contents[..contents.len().min(limit)].to_vec()),
            Some(Node::Dir) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "expected a file, found a directory",
            )),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such entry")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_fs_creates_ancestors() {
        let mut fs = MemoryFileSystem::new(PathStyle::Windows);
        fs.add_file("C:\\repo\\sub\\file.txt", "hi");

        assert_eq!(fs.entry_kind("C:\\repo"), EntryKind::Dir);
        assert_eq!(fs.entry_kind("C:\\repo\\sub"), EntryKind::Dir);
        assert_eq!(fs.entry_kind("C:\\repo\\sub\\file.txt"), EntryKind::File);
        assert_eq!(fs.entry_kind("C:\\repo\\other"), EntryKind::Missing);
    }

    #[test]
    fn memory_fs_is_case_insensitive_on_windows() {
        let mut fs = MemoryFileSystem::new(PathStyle::Windows);
        fs.add_dir("C:\\Repo\\.git");

        assert_eq!(fs.entry_kind("c:\\repo\\.GIT"), EntryKind::Dir);
    }

    #[test]
    fn memory_fs_read_caps_at_limit() {
        let mut fs = MemoryFileSystem::new(PathStyle::Posix);
        fs.add_file("/repo/.git", "gitdir: /elsewhere");

        let bytes = fs.read_at_most("/repo/.git", 6).unwrap();
        assert_eq!(bytes, b"gitdir");
    }

    #[test]
    fn memory_fs_read_of_directory_fails() {
        let mut fs = MemoryFileSystem::new(PathStyle::Posix);
        fs.add_dir("/repo/.git");

        assert!(fs.read_at_most("/repo/.git", 64).is_err());
    }

    #[test]
    fn os_fs_classifies_entries() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        std::fs::write(&file, b"x").unwrap();

        let fs = OsFileSystem;
        assert_eq!(fs.entry_kind(dir.path().to_str().unwrap()), EntryKind::Dir);
        assert_eq!(fs.entry_kind(file.to_str().unwrap()), EntryKind::File);
        assert_eq!(
            fs.entry_kind(dir.path().join("missing").to_str().unwrap()),
            EntryKind::Missing
        );
    }

    #[test]
    fn os_fs_read_of_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fs = OsFileSystem;
        assert!(fs.read_at_most(dir.path().to_str().unwrap(), 64).is_err());
    }
}
