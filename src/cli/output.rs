use colored::*;

use crate::common::format::{file_count, human_size, human_size_colored};
use crate::sweep::cache::CacheReport;
use crate::sweep::orphans::OrphanReport;
use crate::sweep::stale::StaleReport;
use crate::system::stats::{DiskStats, MemoryStats};

/// Banner printed at the start of a full interactive run
pub fn print_banner() {
    println!();
    println!("  {} pacsweep — Arch Linux cleanup", "🧹");
    println!("{}", "─".repeat(60).dimmed());
    println!();
}

/// Cache sizes before and after the paccache passes
pub fn print_cache_report(report: &CacheReport) {
    println!(
        "  {} Package cache: {} → {} ({} freed)",
        "✓".green(),
        human_size(report.before),
        human_size(report.after),
        human_size_colored(report.freed())
    );
}

pub fn print_orphan_report(report: &OrphanReport) {
    if !report.removed.is_empty() {
        println!(
            "  {} Removed {} orphaned package{}",
            "✓".green(),
            report.removed.len(),
            if report.removed.len() == 1 { "" } else { "s" }
        );
    }
}

pub fn print_stale_report(report: &StaleReport) {
    println!(
        "  {} Stale cleanup: removed {} across {} director{}",
        "✓".green(),
        file_count(report.removed),
        report.scanned_dirs,
        if report.scanned_dirs == 1 { "y" } else { "ies" }
    );
}

/// Closing summary: the categories of work this run offers, then live
/// disk and memory stats.
pub fn print_run_summary(disk: &DiskStats, mem: &MemoryStats) {
    println!();
    println!("  {} Cleanup complete", "✨");
    println!("{}", "─".repeat(60).dimmed());
    println!("  Work offered this run:");
    println!("    {} Package cache pruning", "•".dimmed());
    println!("    {} Orphaned dependency removal", "•".dimmed());
    println!("    {} Stale config cleanup", "•".dimmed());
    println!("    {} Journal optimization", "•".dimmed());
    println!();
    print_stats(disk, mem);
}

/// Live system stats from df and free
pub fn print_stats(disk: &DiskStats, mem: &MemoryStats) {
    println!(
        "  {} Disk ({}): {} used / {} ({} free)",
        "💾",
        disk.mount,
        human_size(disk.used),
        human_size(disk.total),
        human_size(disk.available).cyan()
    );
    println!(
        "  {} Memory: {} used / {} ({} available)",
        "🧠",
        human_size(mem.used),
        human_size(mem.total),
        human_size(mem.available).cyan()
    );
    println!();
}

/// Stats as JSON for pipe consumers
pub fn print_stats_json(disk: &DiskStats, mem: &MemoryStats) -> anyhow::Result<()> {
    let json = serde_json::json!({
        "disk": {
            "mount": disk.mount,
            "total": disk.total,
            "used": disk.used,
            "available": disk.available,
        },
        "memory": {
            "total": mem.total,
            "used": mem.used,
            "available": mem.available,
        },
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
