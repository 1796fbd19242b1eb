use crate::common::errors::PreflightError;

/// Effective uid of the current process, read from /proc/self/status.
/// The Uid line lists real, effective, saved, and filesystem uids.
pub fn effective_uid() -> Option<u32> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    for line in status.lines() {
        if let Some(rest) = line.strip_prefix("Uid:") {
            return rest.split_whitespace().nth(1)?.parse().ok();
        }
    }
    None
}

/// Check if the current process runs as root
pub fn is_root() -> bool {
    effective_uid() == Some(0)
}

/// Fail fast when not running as root. Every destructive step calls
/// this before touching the system.
pub fn ensure_root() -> Result<(), PreflightError> {
    if is_root() {
        Ok(())
    } else {
        Err(PreflightError::NotRoot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_uid_is_readable() {
        // /proc is always present on the platforms pacsweep targets
        assert!(effective_uid().is_some());
    }

    #[test]
    fn test_ensure_root_matches_is_root() {
        assert_eq!(ensure_root().is_ok(), is_root());
    }
}
