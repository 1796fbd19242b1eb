use anyhow::Result;
use colored::Colorize;

use crate::system::SystemOps;

/// Packages removed by the orphan step
#[derive(Debug, Clone)]
pub struct OrphanReport {
    pub removed: Vec<String>,
}

/// Query orphaned dependencies and remove them in one aggregate pass.
/// The step is already confirmed by the caller's gate, so there is no
/// per-package prompting.
pub fn remove(sys: &dyn SystemOps) -> Result<OrphanReport> {
    let orphans = sys.query_orphans()?;

    if orphans.is_empty() {
        println!("  {} No orphaned packages — nothing to do", "✨");
        return Ok(OrphanReport {
            removed: Vec::new(),
        });
    }

    println!("  The following packages are no longer required:");
    for name in &orphans {
        println!("    {} {}", "•".dimmed(), name);
    }

    sys.remove_packages(&orphans)?;

    Ok(OrphanReport { removed: orphans })
}
