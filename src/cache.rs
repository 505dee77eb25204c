use lru::LruCache;
use std::num::NonZeroUsize;

use crate::discover::Discovery;

/// Opt-in memoization of top-dir lookups within one process.
///
/// Discovery itself re-walks the filesystem on every call. Callers that
/// classify many paths under the same few directories (the shell-overlay
/// pattern) can route lookups through this cache instead. Negative results
/// are cached too; stale entries are the caller's problem, which is why this
/// stays out of [`Discovery`] itself.
pub struct DiscoveryCache<'fs> {
    discovery: Discovery<'fs>,
    top_dirs: LruCache<String, Option<String>>,
}

impl<'fs> DiscoveryCache<'fs> {
    pub fn new(discovery: Discovery<'fs>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(64).unwrap());
        Self {
            discovery,
            top_dirs: LruCache::new(capacity),
        }
    }

    pub fn discovery(&self) -> &Discovery<'fs> {
        &self.discovery
    }

    /// Memoized [`Discovery::top_dir`].
    pub fn top_dir(&mut self, path: &str) -> Option<String> {
        if let Some(cached) = self.top_dirs.get(path) {
            return cached.clone();
        }
        let result = self.discovery.top_dir(path);
        self.top_dirs.put(path.to_string(), result.clone());
        result
    }

    pub fn clear(&mut self) {
        self.top_dirs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFileSystem;
    use crate::platform::PathStyle;

    #[test]
    fn caches_positive_and_negative_results() {
        let mut fs = MemoryFileSystem::new(PathStyle::Posix);
        fs.add_dir("/work/repo/.git");
        fs.add_dir("/work/repo/src");
        let mut cache = DiscoveryCache::new(Discovery::new(&fs, PathStyle::Posix), 8);

        assert_eq!(cache.top_dir("/work/repo/src").as_deref(), Some("/work/repo"));
        assert_eq!(cache.top_dir("/work/repo/src").as_deref(), Some("/work/repo"));
        assert_eq!(cache.top_dir("/elsewhere"), None);
        assert_eq!(cache.top_dir("/elsewhere"), None);
    }

    #[test]
    fn clear_drops_entries() {
        let fs = MemoryFileSystem::new(PathStyle::Posix);
        let mut cache = DiscoveryCache::new(Discovery::new(&fs, PathStyle::Posix), 8);

        assert_eq!(cache.top_dir("/nowhere"), None);
        cache.clear();
        assert_eq!(cache.top_dir("/nowhere"), None);
    }

    #[test]
    fn zero_capacity_falls_back_to_default() {
        let fs = MemoryFileSystem::new(PathStyle::Posix);
        let mut cache = DiscoveryCache::new(Discovery::new(&fs, PathStyle::Posix), 0);
        assert_eq!(cache.top_dir("/nowhere"), None);
    }
}
