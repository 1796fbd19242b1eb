use anyhow::Result;

use super::pacman::run_tool;

/// Trim the journal down to a total size cap (e.g. "500M")
pub fn vacuum_size(max_size: &str) -> Result<()> {
    run_tool("journalctl", &[format!("--vacuum-size={}", max_size)])?;
    Ok(())
}

/// Drop journal entries older than the given window (e.g. "7d")
pub fn vacuum_age(window: &str) -> Result<()> {
    run_tool("journalctl", &[format!("--vacuum-time={}", window)])?;
    Ok(())
}

/// Force rotation of the active journal files so vacuuming can reach
/// entries still held in them
pub fn rotate() -> Result<()> {
    run_tool("journalctl", &["--rotate".to_string()])?;
    Ok(())
}
