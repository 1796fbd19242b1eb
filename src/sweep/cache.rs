use anyhow::Result;
use std::path::Path;
use walkdir::WalkDir;

use crate::common::config::Config;
use crate::system::SystemOps;

/// Where pacman keeps downloaded package archives
pub const PACMAN_CACHE_DIR: &str = "/var/cache/pacman/pkg";

/// Cache size before and after the paccache passes
#[derive(Debug, Clone)]
pub struct CacheReport {
    pub before: u64,
    pub after: u64,
}

impl CacheReport {
    pub fn freed(&self) -> u64 {
        self.before.saturating_sub(self.after)
    }
}

/// Prune the package cache: first drop every cached version of packages
/// that are no longer installed, then trim installed packages down to
/// the configured retention count.
pub fn prune(config: &Config, sys: &dyn SystemOps) -> Result<CacheReport> {
    let cache_dir = Path::new(PACMAN_CACHE_DIR);
    let before = dir_size(cache_dir);

    sys.prune_uninstalled_cache()?;
    sys.prune_cache_keep(config.keep_versions)?;

    let after = dir_size(cache_dir);
    Ok(CacheReport { before, after })
}

/// Total size of all regular files under a directory
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_size_missing_dir_is_zero() {
        assert_eq!(dir_size(Path::new("/nonexistent/pacsweep/xyz")), 0);
    }

    #[test]
    fn test_dir_size_counts_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.pkg"), vec![0u8; 100]).unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/b.pkg"), vec![0u8; 50]).unwrap();
        assert_eq!(dir_size(dir.path()), 150);
    }

    #[test]
    fn test_freed_never_underflows() {
        let report = CacheReport {
            before: 10,
            after: 20,
        };
        assert_eq!(report.freed(), 0);
    }
}
