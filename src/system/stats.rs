use anyhow::{Context, Result};

/// Filesystem usage for a single mount point
#[derive(Debug, Clone)]
pub struct DiskStats {
    pub mount: String,
    pub total: u64,
    pub used: u64,
    pub available: u64,
}

/// System memory usage
#[derive(Debug, Clone)]
pub struct MemoryStats {
    pub total: u64,
    pub used: u64,
    pub available: u64,
}

/// Filesystem usage via `df -k`, parsed by column position
pub fn disk_stats(mount: &str) -> Result<DiskStats> {
    let output = std::process::Command::new("df")
        .args(["-k", mount])
        .output()
        .context("Failed to run df")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("df -k {} failed: {}", mount, stderr.trim());
    }

    parse_df(&String::from_utf8_lossy(&output.stdout), mount)
}

/// Memory usage via `free -b`, parsed by column position
pub fn memory_stats() -> Result<MemoryStats> {
    let output = std::process::Command::new("free")
        .arg("-b")
        .output()
        .context("Failed to run free")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("free -b failed: {}", stderr.trim());
    }

    parse_free(&String::from_utf8_lossy(&output.stdout))
}

/// Parse df -k output. Second line: filesystem 1K-blocks used available ...
fn parse_df(text: &str, mount: &str) -> Result<DiskStats> {
    let line = text
        .lines()
        .nth(1)
        .with_context(|| format!("Unexpected df output for {}", mount))?;
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        anyhow::bail!("Unexpected df output for {}: '{}'", mount, line);
    }

    let total = parts[1].parse::<u64>().unwrap_or(0) * 1024;
    let used = parts[2].parse::<u64>().unwrap_or(0) * 1024;
    let available = parts[3].parse::<u64>().unwrap_or(0) * 1024;

    Ok(DiskStats {
        mount: mount.to_string(),
        total,
        used,
        available,
    })
}

/// Parse free -b output. Mem line: total used free shared buff/cache available
fn parse_free(text: &str) -> Result<MemoryStats> {
    let line = text
        .lines()
        .find(|l| l.starts_with("Mem:"))
        .context("Unexpected free output: no Mem line")?;
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        anyhow::bail!("Unexpected free output: '{}'", line);
    }

    let total = parts[1].parse::<u64>().unwrap_or(0);
    let used = parts[2].parse::<u64>().unwrap_or(0);
    // Older procps lacks the available column; fall back to free
    let available = parts
        .get(6)
        .or_else(|| parts.get(3))
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);

    Ok(MemoryStats {
        total,
        used,
        available,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DF_OUTPUT: &str = "\
Filesystem     1K-blocks     Used Available Use% Mounted on
/dev/nvme0n1p2 102687672 41152736  56287564  43% /
";

    const FREE_OUTPUT: &str = "\
               total        used        free      shared  buff/cache   available
Mem:     16384000000  6144000000  2048000000   512000000  8192000000  9728000000
Swap:     8192000000           0  8192000000
";

    #[test]
    fn test_parse_df() {
        let stats = parse_df(DF_OUTPUT, "/").unwrap();
        assert_eq!(stats.mount, "/");
        assert_eq!(stats.total, 102687672 * 1024);
        assert_eq!(stats.used, 41152736 * 1024);
        assert_eq!(stats.available, 56287564 * 1024);
    }

    #[test]
    fn test_parse_df_rejects_garbage() {
        assert!(parse_df("nonsense\n", "/").is_err());
        assert!(parse_df("", "/").is_err());
    }

    #[test]
    fn test_parse_free() {
        let stats = parse_free(FREE_OUTPUT).unwrap();
        assert_eq!(stats.total, 16384000000);
        assert_eq!(stats.used, 6144000000);
        assert_eq!(stats.available, 9728000000);
    }

    #[test]
    fn test_parse_free_without_available_column() {
        let out = "\
             total       used       free     shared    buffers
Mem:      16384000    6144000    2048000     512000     819200
";
        let stats = parse_free(out).unwrap();
        assert_eq!(stats.total, 16384000);
        assert_eq!(stats.available, 2048000);
    }

    #[test]
    fn test_parse_free_rejects_garbage() {
        assert!(parse_free("no memory here\n").is_err());
    }
}
