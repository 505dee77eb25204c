use serde::Serialize;

use crate::cache::DiscoveryCache;

/// Classification of one queried path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathKind {
    /// Inside a working tree governed by an admin directory.
    WorkingTree,
    /// The path is itself a bare repository.
    BareRepository,
    /// Inside (or equal to) an admin directory.
    AdminDirectory,
    /// Not related to any repository.
    Unrelated,
}

/// Everything the CLI reports about one path.
#[derive(Clone, Debug, Serialize)]
pub struct PathReport {
    pub path: String,
    pub kind: PathKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_tree_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_project_root: Option<String>,
}

impl PathReport {
    /// Classify `path` and gather everything consumers ask discovery for.
    pub fn collect(cache: &mut DiscoveryCache<'_>, path: &str) -> Self {
        let top_dir = cache.top_dir(path);
        let discovery = cache.discovery();

        if let Some(root) = top_dir {
            let admin_dir = discovery.admin_dir_path(&root);
            // The walk sees the root's own .git first, so the superproject
            // question has to be asked from the root's parent.
            let style = discovery.style();
            let super_project_root = style
                .last_separator(&root)
                .map(|i| &root[..i])
                .filter(|parent| !parent.is_empty())
                .and_then(|parent| discovery.super_project_root(parent));
            return Self {
                path: path.to_string(),
                kind: PathKind::WorkingTree,
                working_tree_root: Some(root),
                admin_dir,
                super_project_root,
            };
        }

        if discovery.is_bare_repo(path) {
            let admin_dir = discovery.admin_dir_path(path);
            return Self {
                path: path.to_string(),
                kind: PathKind::BareRepository,
                working_tree_root: None,
                admin_dir,
                super_project_root: None,
            };
        }

        let kind = if discovery.is_admin_dir_path(path) {
            PathKind::AdminDirectory
        } else {
            PathKind::Unrelated
        };
        Self {
            path: path.to_string(),
            kind,
            working_tree_root: None,
            admin_dir: None,
            super_project_root: None,
        }
    }

    /// True when the path belongs to a repository in any role.
    pub fn found(&self) -> bool {
        matches!(self.kind, PathKind::WorkingTree | PathKind::BareRepository)
    }

    /// Human-readable rendering, one field per line.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.path);
        let kind = match self.kind {
            PathKind::WorkingTree => "working tree",
            PathKind::BareRepository => "bare repository",
            PathKind::AdminDirectory => "admin directory",
            PathKind::Unrelated => "not in a repository",
        };
        out.push_str(&format!("  kind:         {kind}\n"));
        if let Some(root) = &self.working_tree_root {
            out.push_str(&format!("  top dir:      {root}\n"));
        }
        if let Some(admin) = &self.admin_dir {
            out.push_str(&format!("  admin dir:    {admin}\n"));
        }
        if let Some(superproject) = &self.super_project_root {
            out.push_str(&format!("  superproject: {superproject}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discover::Discovery;
    use crate::fs::MemoryFileSystem;
    use crate::platform::PathStyle;
    use pretty_assertions::assert_eq;

    fn fixture() -> MemoryFileSystem {
        let mut fs = MemoryFileSystem::new(PathStyle::Posix);
        fs.add_dir("/work/repo/.git");
        fs.add_file("/work/repo/.gitmodules", "[submodule \"sub\"]\n");
        fs.add_file("/work/repo/sub/.git", "gitdir: ../.git/modules/sub\n");
        fs.add_file("/work/repo/sub/file.txt", "");
        fs
    }

    #[test]
    fn reports_working_tree_with_superproject() {
        let fs = fixture();
        let mut cache = DiscoveryCache::new(Discovery::new(&fs, PathStyle::Posix), 8);

        let report = PathReport::collect(&mut cache, "/work/repo/sub/file.txt");
        assert_eq!(report.kind, PathKind::WorkingTree);
        assert_eq!(report.working_tree_root.as_deref(), Some("/work/repo/sub"));
        assert_eq!(
            report.admin_dir.as_deref(),
            Some("/work/repo/.git/modules/sub/")
        );
        assert_eq!(report.super_project_root.as_deref(), Some("/work/repo"));
        assert!(report.found());
    }

    #[test]
    fn reports_admin_directory_paths() {
        let fs = fixture();
        let mut cache = DiscoveryCache::new(Discovery::new(&fs, PathStyle::Posix), 8);

        let report = PathReport::collect(&mut cache, "/work/repo/.git/config");
        assert_eq!(report.kind, PathKind::AdminDirectory);
        assert!(!report.found());
        assert_eq!(report.working_tree_root, None);
    }

    #[test]
    fn reports_unrelated_paths() {
        let fs = fixture();
        let mut cache = DiscoveryCache::new(Discovery::new(&fs, PathStyle::Posix), 8);

        let report = PathReport::collect(&mut cache, "/elsewhere/file");
        assert_eq!(report.kind, PathKind::Unrelated);
        assert!(!report.found());
    }

    #[test]
    fn render_lists_known_fields() {
        let fs = fixture();
        let mut cache = DiscoveryCache::new(Discovery::new(&fs, PathStyle::Posix), 8);

        let rendered = PathReport::collect(&mut cache, "/work/repo").render();
        assert!(rendered.contains("working tree"));
        assert!(rendered.contains("top dir:      /work/repo"));
        assert!(rendered.contains("admin dir:    /work/repo/.git/"));
    }
}
