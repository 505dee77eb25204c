//! Repository and working-tree discovery.
//!
//! Everything here answers one question for an arbitrary path: where is the
//! admin directory (`.git`) that governs it, if any? The walk, bare-repo
//! classification, gitlink resolution, and superproject lookup are split
//! across the submodules; [`Discovery`] ties them to a filesystem and a
//! path profile.

pub mod bare;
pub mod gitlink;
pub mod superproject;
pub mod walk;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, WurzelError};
use crate::fs::{FileSystem, OsFileSystem};
use crate::platform::PathStyle;

pub use walk::WalkOutcome;

/// Name of the metadata directory that marks a working tree.
pub const ADMIN_DIR_NAME: &str = ".git";

/// Name of the submodule manifest a superproject carries next to its admin
/// directory.
pub const GITMODULES_FILE: &str = ".gitmodules";

static OS_FS: OsFileSystem = OsFileSystem;

/// Discovery handle: a filesystem to probe and a path profile to interpret
/// strings with.
///
/// Holds no mutable state; every query re-walks the filesystem, so results
/// stay correct when a repository is reinitialized between calls. Callers
/// that want memoization can layer [`crate::cache::DiscoveryCache`] on top.
pub struct Discovery<'fs> {
    fs: &'fs dyn FileSystem,
    style: PathStyle,
    admin_dir_name: &'static str,
}

impl<'fs> Discovery<'fs> {
    pub fn new(fs: &'fs dyn FileSystem, style: PathStyle) -> Self {
        Self {
            fs,
            style,
            admin_dir_name: ADMIN_DIR_NAME,
        }
    }

    /// Discovery over the real filesystem with the target platform's profile.
    pub fn native() -> Discovery<'static> {
        Discovery::new(&OS_FS, PathStyle::native())
    }

    pub fn style(&self) -> PathStyle {
        self.style
    }

    pub fn admin_dir_name(&self) -> &'static str {
        self.admin_dir_name
    }

    pub(crate) fn fs(&self) -> &'fs dyn FileSystem {
        self.fs
    }

    /// Full classification of a path: working-tree root, admin directory and
    /// bare flag in one shot.
    ///
    /// Returns `None` for paths unrelated to any repository, and for paths
    /// inside an admin directory (those are metadata, not working-copy
    /// content). The returned `admin_dir` always carries exactly one
    /// trailing separator; `working_tree_root` is empty for bare
    /// repositories, which have no checked-out files.
    pub fn resolve(&self, path: &str) -> Option<AdminDirReference> {
        if self.is_bare_repo(path) {
            return Some(AdminDirReference {
                working_tree_root: String::new(),
                admin_dir: self.style.ensure_trailing_separator(path),
                is_bare: true,
            });
        }
        match self.locate(path) {
            WalkOutcome::WorkingTree { top_dir } => {
                let admin_dir = self.admin_dir_path(&top_dir)?;
                Some(AdminDirReference {
                    working_tree_root: top_dir,
                    admin_dir,
                    is_bare: false,
                })
            }
            WalkOutcome::InsideAdminDir | WalkOutcome::NoRepository => None,
        }
    }
}

/// Result of a successful discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminDirReference {
    /// Root of the working tree; empty when `is_bare`.
    pub working_tree_root: String,
    /// The governing metadata directory, with one trailing separator.
    pub admin_dir: String,
    pub is_bare: bool,
}

/// Find the working-tree root containing `start_path` on the real
/// filesystem.
///
/// The ergonomic entry point for callers that just want a root or an error.
pub fn discover_working_tree(start_path: &Path) -> Result<PathBuf> {
    let path = start_path
        .to_str()
        .ok_or_else(|| WurzelError::NonUnicodePath {
            path: start_path.to_path_buf(),
        })?;
    let discovery = Discovery::native();
    match discovery.top_dir(path) {
        Some(top) => Ok(PathBuf::from(top)),
        None => Err(WurzelError::NotARepository {
            path: start_path.to_path_buf(),
        }),
    }
}
