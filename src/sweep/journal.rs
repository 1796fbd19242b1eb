use anyhow::Result;

use crate::common::config::Config;
use crate::system::SystemOps;

/// Entries older than this are always vacuumed
pub const RETAIN_WINDOW: &str = "7d";

/// Journal maintenance: vacuum to the configured size cap, rotate the
/// active files so their entries become reachable, then vacuum by age.
pub fn optimize(config: &Config, sys: &dyn SystemOps) -> Result<()> {
    sys.vacuum_journal_size(&config.journal_max_size)?;
    sys.rotate_journal()?;
    sys.vacuum_journal_age(RETAIN_WINDOW)?;
    Ok(())
}
