use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::cli::prompt::Confirm;
use crate::common::format;

/// Filename suffixes treated as stale editor/upgrade leftovers
pub const BACKUP_SUFFIXES: &[&str] = &[".bak", ".old", "~"];

/// Outcome of a stale-file sweep. `removed` counts every deleted broken
/// symlink plus every backup file the user confirmed.
#[derive(Debug, Clone, Default)]
pub struct StaleReport {
    pub removed: usize,
    pub scanned_dirs: usize,
}

#[derive(Debug, Default)]
struct Findings {
    broken_links: Vec<PathBuf>,
    backups: Vec<PathBuf>,
}

/// Sweep the configured directories: broken symlinks go unconditionally,
/// backup-suffix files individually after a per-file prompt. Directories
/// that do not exist are silently skipped.
pub fn sweep(
    dirs: &[PathBuf],
    confirm: &mut dyn Confirm,
    show_progress: bool,
) -> Result<StaleReport> {
    let mut report = StaleReport::default();

    for dir in dirs {
        if !dir.is_dir() {
            continue;
        }
        report.scanned_dirs += 1;

        let pb = if show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("  {spinner:.cyan} Scanning {msg}")
                    .unwrap(),
            );
            pb.set_message(format::display_path(dir));
            Some(pb)
        } else {
            None
        };

        let findings = scan_dir(dir, pb.as_ref());

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        for link in &findings.broken_links {
            std::fs::remove_file(link)
                .with_context(|| format!("Failed to remove broken symlink: {}", link.display()))?;
            tracing::debug!(path = %link.display(), "removed broken symlink");
            println!(
                "  {} Removed broken symlink {}",
                "✓".green(),
                format::display_path(link).dimmed()
            );
            report.removed += 1;
        }

        for file in &findings.backups {
            if confirm.confirm(&format!("Delete {}?", format::display_path(file)))? {
                std::fs::remove_file(file)
                    .with_context(|| format!("Failed to remove: {}", file.display()))?;
                report.removed += 1;
            }
        }
    }

    Ok(report)
}

/// Collect broken symlinks and backup-suffix files under one directory.
/// Unreadable entries are skipped, not fatal.
fn scan_dir(dir: &Path, pb: Option<&ProgressBar>) -> Findings {
    let mut findings = Findings::default();

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if let Some(pb) = pb {
            pb.tick();
        }

        let path = entry.path();
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            // A symlink whose target fails to resolve is broken
            if std::fs::metadata(path).is_err() {
                findings.broken_links.push(path.to_path_buf());
            }
        } else if file_type.is_file() && has_backup_suffix(path) {
            findings.backups.push(path.to_path_buf());
        }
    }

    findings
}

fn has_backup_suffix(path: &Path) -> bool {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return false,
    };
    BACKUP_SUFFIXES.iter().any(|s| name.ends_with(s))
}
