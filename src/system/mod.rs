pub mod journal;
pub mod pacman;
pub mod stats;

use anyhow::Result;
use colored::Colorize;

use crate::cli::prompt::Confirm;
use crate::common::errors::PreflightError;
use stats::{DiskStats, MemoryStats};

/// Every external capability pacsweep uses, one method per command.
/// Cleanup steps run against this trait so tests can substitute a
/// recording fake instead of mutating a real system.
pub trait SystemOps {
    /// Drop every cached version of packages no longer installed
    fn prune_uninstalled_cache(&self) -> Result<()>;

    /// Trim cached versions of installed packages to a retention count
    fn prune_cache_keep(&self, keep_versions: u32) -> Result<()>;

    /// Packages installed as dependencies that nothing requires anymore
    fn query_orphans(&self) -> Result<Vec<String>>;

    /// Remove packages along with their config and unneeded dependencies
    fn remove_packages(&self, packages: &[String]) -> Result<()>;

    /// Install packages from the repositories
    fn install_packages(&self, packages: &[&str]) -> Result<()>;

    /// Trim the journal down to a total size cap
    fn vacuum_journal_size(&self, max_size: &str) -> Result<()>;

    /// Drop journal entries older than the given window
    fn vacuum_journal_age(&self, window: &str) -> Result<()>;

    /// Force rotation of the active journal files
    fn rotate_journal(&self) -> Result<()>;

    /// Filesystem usage for a mount point
    fn disk_stats(&self, mount: &str) -> Result<DiskStats>;

    /// System memory usage
    fn memory_stats(&self) -> Result<MemoryStats>;
}

/// The real thing: shells out to pacman, paccache, journalctl, df, free.
pub struct HostSystem;

impl SystemOps for HostSystem {
    fn prune_uninstalled_cache(&self) -> Result<()> {
        pacman::prune_uninstalled_cache()
    }

    fn prune_cache_keep(&self, keep_versions: u32) -> Result<()> {
        pacman::prune_cache_keep(keep_versions)
    }

    fn query_orphans(&self) -> Result<Vec<String>> {
        pacman::query_orphans()
    }

    fn remove_packages(&self, packages: &[String]) -> Result<()> {
        pacman::remove_packages(packages)
    }

    fn install_packages(&self, packages: &[&str]) -> Result<()> {
        pacman::install_packages(packages)
    }

    fn vacuum_journal_size(&self, max_size: &str) -> Result<()> {
        journal::vacuum_size(max_size)
    }

    fn vacuum_journal_age(&self, window: &str) -> Result<()> {
        journal::vacuum_age(window)
    }

    fn rotate_journal(&self) -> Result<()> {
        journal::rotate()
    }

    fn disk_stats(&self, mount: &str) -> Result<DiskStats> {
        stats::disk_stats(mount)
    }

    fn memory_stats(&self) -> Result<MemoryStats> {
        stats::memory_stats()
    }
}

/// Helper binaries pacsweep invokes, each with the repository package
/// that provides it. pacman has no entry: it performs the installs, so
/// its own absence cannot be repaired from here.
const REQUIRED_TOOLS: &[(&str, Option<&str>)] = &[
    ("pacman", None),
    ("paccache", Some("pacman-contrib")),
    ("journalctl", Some("systemd")),
    ("df", Some("coreutils")),
    ("free", Some("procps-ng")),
];

/// Verify every required helper resolves on PATH, offering to install
/// the ones that have a providing package. Declined or failed installs
/// abort before any cleanup step runs.
pub fn ensure_tools(sys: &dyn SystemOps, confirm: &mut dyn Confirm) -> Result<()> {
    for (tool, package) in REQUIRED_TOOLS {
        if which::which(tool).is_ok() {
            continue;
        }

        let package = match package {
            Some(p) => *p,
            None => {
                return Err(PreflightError::MissingTool {
                    tool: tool.to_string(),
                }
                .into())
            }
        };

        println!(
            "  {} '{}' is not installed (provided by {})",
            "⚠".yellow(),
            tool,
            package.cyan()
        );
        if !confirm.confirm(&format!("Install {} now?", package))? {
            return Err(PreflightError::InstallDeclined {
                tool: tool.to_string(),
                package: package.to_string(),
            }
            .into());
        }

        sys.install_packages(&[package])?;
        if which::which(tool).is_err() {
            return Err(PreflightError::MissingTool {
                tool: tool.to_string(),
            }
            .into());
        }
        println!("  {} Installed {}", "✓".green(), package);
    }

    Ok(())
}
