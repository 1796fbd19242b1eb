use anyhow::Result;
use colored::Colorize;

use super::{cache, journal, orphans, stale};
use crate::cli::output;
use crate::cli::prompt::Confirm;
use crate::common::config::Config;
use crate::common::privileges;
use crate::sweep::cache::CacheReport;
use crate::sweep::orphans::OrphanReport;
use crate::sweep::stale::StaleReport;
use crate::system::{self, SystemOps};

/// What a full run did. Steps the user declined stay None.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub cache: Option<CacheReport>,
    pub orphans: Option<OrphanReport>,
    pub stale: Option<StaleReport>,
    pub journal_optimized: bool,
}

/// The full interactive cleanup: verify preconditions, then offer each
/// step behind its own gate. Any failing tool aborts the rest of the run.
pub fn run(
    config: &Config,
    sys: &dyn SystemOps,
    confirm: &mut dyn Confirm,
    show_progress: bool,
) -> Result<RunSummary> {
    privileges::ensure_root()?;
    system::ensure_tools(sys, confirm)?;
    run_steps(config, sys, confirm, show_progress)
}

/// The gated step sequence, preconditions already verified
pub(crate) fn run_steps(
    config: &Config,
    sys: &dyn SystemOps,
    confirm: &mut dyn Confirm,
    show_progress: bool,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    if confirm.confirm("Prune the pacman package cache?")? {
        let report = cache::prune(config, sys)?;
        output::print_cache_report(&report);
        summary.cache = Some(report);
    }

    if confirm.confirm("Remove orphaned dependencies?")? {
        let report = orphans::remove(sys)?;
        output::print_orphan_report(&report);
        summary.orphans = Some(report);
    }

    if confirm.confirm("Clean stale files from user directories?")? {
        let report = stale::sweep(&config.stale_dirs, confirm, show_progress)?;
        output::print_stale_report(&report);
        summary.stale = Some(report);
    }

    if confirm.confirm("Optimize the systemd journal?")? {
        journal::optimize(config, sys)?;
        println!("  {} Journal vacuumed and rotated", "✓".green());
        summary.journal_optimized = true;
    }

    let disk = sys.disk_stats("/")?;
    let mem = sys.memory_stats()?;
    output::print_run_summary(&disk, &mem);

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::ScriptedConfirm;
    use crate::system::stats::{DiskStats, MemoryStats};
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Records every call instead of touching the system
    #[derive(Default)]
    struct FakeSystem {
        calls: RefCell<Vec<String>>,
        orphans: Vec<String>,
    }

    impl FakeSystem {
        fn with_orphans(orphans: &[&str]) -> Self {
            Self {
                orphans: orphans.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.borrow_mut().push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        /// Calls that change system state; queries and stats reads are
        /// filtered out
        fn mutating_calls(&self) -> Vec<String> {
            self.calls()
                .into_iter()
                .filter(|c| !c.starts_with("stats:") && c != "query-orphans")
                .collect()
        }
    }

    impl SystemOps for FakeSystem {
        fn prune_uninstalled_cache(&self) -> Result<()> {
            self.record("prune-uninstalled");
            Ok(())
        }

        fn prune_cache_keep(&self, keep_versions: u32) -> Result<()> {
            self.record(format!("prune-keep:{}", keep_versions));
            Ok(())
        }

        fn query_orphans(&self) -> Result<Vec<String>> {
            self.record("query-orphans");
            Ok(self.orphans.clone())
        }

        fn remove_packages(&self, packages: &[String]) -> Result<()> {
            self.record(format!("remove:{}", packages.join(",")));
            Ok(())
        }

        fn install_packages(&self, packages: &[&str]) -> Result<()> {
            self.record(format!("install:{}", packages.join(",")));
            Ok(())
        }

        fn vacuum_journal_size(&self, max_size: &str) -> Result<()> {
            self.record(format!("vacuum-size:{}", max_size));
            Ok(())
        }

        fn vacuum_journal_age(&self, window: &str) -> Result<()> {
            self.record(format!("vacuum-age:{}", window));
            Ok(())
        }

        fn rotate_journal(&self) -> Result<()> {
            self.record("rotate");
            Ok(())
        }

        fn disk_stats(&self, mount: &str) -> Result<DiskStats> {
            self.record(format!("stats:disk:{}", mount));
            Ok(DiskStats {
                mount: mount.to_string(),
                total: 100,
                used: 60,
                available: 40,
            })
        }

        fn memory_stats(&self) -> Result<MemoryStats> {
            self.record("stats:memory");
            Ok(MemoryStats {
                total: 100,
                used: 50,
                available: 50,
            })
        }
    }

    fn test_config(stale_dirs: Vec<PathBuf>) -> Config {
        Config {
            keep_versions: 2,
            journal_max_size: "500M".to_string(),
            stale_dirs,
        }
    }

    #[test]
    fn test_declining_everything_mutates_nothing() {
        let sys = FakeSystem::default();
        let config = test_config(Vec::new());
        let mut confirm = ScriptedConfirm::new(&[]);

        let summary = run_steps(&config, &sys, &mut confirm, false).unwrap();

        assert!(sys.mutating_calls().is_empty());
        assert!(summary.cache.is_none());
        assert!(summary.orphans.is_none());
        assert!(summary.stale.is_none());
        assert!(!summary.journal_optimized);
    }

    #[test]
    fn test_summary_stats_always_reported() {
        let sys = FakeSystem::default();
        let config = test_config(Vec::new());
        let mut confirm = ScriptedConfirm::new(&[]);

        run_steps(&config, &sys, &mut confirm, false).unwrap();

        let calls = sys.calls();
        assert!(calls.contains(&"stats:disk:/".to_string()));
        assert!(calls.contains(&"stats:memory".to_string()));
    }

    #[test]
    fn test_cache_step_runs_both_passes_in_order() {
        let sys = FakeSystem::default();
        let config = test_config(Vec::new());
        let mut confirm = ScriptedConfirm::new(&[true, false, false, false]);

        let summary = run_steps(&config, &sys, &mut confirm, false).unwrap();

        assert_eq!(
            sys.mutating_calls(),
            vec!["prune-uninstalled", "prune-keep:2"]
        );
        assert!(summary.cache.is_some());
    }

    #[test]
    fn test_orphans_empty_reports_nothing_to_do() {
        let sys = FakeSystem::default();
        let config = test_config(Vec::new());
        let mut confirm = ScriptedConfirm::new(&[false, true, false, false]);

        let summary = run_steps(&config, &sys, &mut confirm, false).unwrap();

        // Query ran, removal did not
        assert!(sys.calls().contains(&"query-orphans".to_string()));
        assert!(sys.mutating_calls().is_empty());
        assert!(summary.orphans.unwrap().removed.is_empty());
    }

    #[test]
    fn test_orphans_removed_in_aggregate() {
        let sys = FakeSystem::with_orphans(&["gtest", "lib32-glibc"]);
        let config = test_config(Vec::new());
        let mut confirm = ScriptedConfirm::new(&[false, true, false, false]);

        let summary = run_steps(&config, &sys, &mut confirm, false).unwrap();

        assert_eq!(sys.mutating_calls(), vec!["remove:gtest,lib32-glibc"]);
        assert_eq!(summary.orphans.unwrap().removed.len(), 2);
    }

    #[test]
    fn test_journal_sequence_uses_configured_cap() {
        let sys = FakeSystem::default();
        let mut config = test_config(Vec::new());
        config.journal_max_size = "250M".to_string();
        let mut confirm = ScriptedConfirm::new(&[false, false, false, true]);

        let summary = run_steps(&config, &sys, &mut confirm, false).unwrap();

        assert_eq!(
            sys.mutating_calls(),
            vec!["vacuum-size:250M", "rotate", "vacuum-age:7d"]
        );
        assert!(summary.journal_optimized);
    }

    #[test]
    fn test_declined_helper_install_aborts_before_any_step() {
        // Only meaningful where pacman exists but paccache does not
        if which::which("pacman").is_err() || which::which("paccache").is_ok() {
            return;
        }

        let sys = FakeSystem::default();
        let mut confirm = ScriptedConfirm::new(&[]);

        let err = system::ensure_tools(&sys, &mut confirm).unwrap_err();
        assert!(err.to_string().contains("declined"));
        assert!(sys.mutating_calls().is_empty());
    }

    #[test]
    fn test_stale_step_counts_symlinks_and_confirmed_backups() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        symlink("gone-a", dir.path().join("link-a")).unwrap();
        symlink("gone-b", dir.path().join("link-b")).unwrap();
        std::fs::write(dir.path().join("settings.conf.bak"), b"x").unwrap();

        let sys = FakeSystem::default();
        let config = test_config(vec![dir.path().to_path_buf()]);
        // cache no, orphans no, stale yes, delete the .bak yes, journal no
        let mut confirm = ScriptedConfirm::new(&[false, false, true, true, false]);

        let summary = run_steps(&config, &sys, &mut confirm, false).unwrap();

        assert_eq!(summary.stale.unwrap().removed, 3);
        assert!(sys.mutating_calls().is_empty());
    }
}
