use anyhow::{Context, Result};

/// Drop every cached version of packages that are no longer installed.
/// paccache -r removes, -u restricts to uninstalled, -k0 keeps nothing.
pub fn prune_uninstalled_cache() -> Result<()> {
    run_tool("paccache", &["-ruk0".to_string()])?;
    Ok(())
}

/// Trim cached versions of still-installed packages to a retention count
pub fn prune_cache_keep(keep_versions: u32) -> Result<()> {
    run_tool("paccache", &[format!("-rk{}", keep_versions)])?;
    Ok(())
}

/// Query packages installed as dependencies that nothing requires anymore
pub fn query_orphans() -> Result<Vec<String>> {
    let output = std::process::Command::new("pacman")
        .arg("-Qtdq")
        .output()
        .context("Failed to run pacman -Qtdq")?;

    // pacman -Qtdq exits nonzero when there are no orphans; only a
    // nonzero status with diagnostics on stderr is a real failure
    if !output.status.success() && !output.stderr.is_empty() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("pacman -Qtdq failed: {}", stderr.trim());
    }

    Ok(parse_package_list(&String::from_utf8_lossy(&output.stdout)))
}

/// Remove packages with their config files and unneeded dependencies.
/// The caller has already confirmed the step in aggregate, so pacman
/// must not prompt per package.
pub fn remove_packages(packages: &[String]) -> Result<()> {
    let mut args = vec!["-Rns".to_string(), "--noconfirm".to_string()];
    args.extend(packages.iter().cloned());
    run_tool("pacman", &args)?;
    Ok(())
}

/// Install packages from the repositories without prompting
pub fn install_packages(packages: &[&str]) -> Result<()> {
    let mut args = vec![
        "-S".to_string(),
        "--noconfirm".to_string(),
        "--needed".to_string(),
    ];
    args.extend(packages.iter().map(|p| p.to_string()));
    run_tool("pacman", &args)?;
    Ok(())
}

/// One package name per line, as pacman -Qq prints them
fn parse_package_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run a tool and return stdout, surfacing stderr on failure
pub(crate) fn run_tool(tool: &str, args: &[String]) -> Result<String> {
    tracing::debug!(tool, ?args, "invoking");

    let output = std::process::Command::new(tool)
        .args(args)
        .output()
        .with_context(|| format!("Failed to run {}", tool))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("{} {} failed: {}", tool, args.join(" "), stderr.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_package_list() {
        let out = "gtest\nlib32-glibc\n\npython-packaging\n";
        assert_eq!(
            parse_package_list(out),
            vec!["gtest", "lib32-glibc", "python-packaging"]
        );
    }

    #[test]
    fn test_parse_package_list_empty() {
        assert!(parse_package_list("").is_empty());
        assert!(parse_package_list("\n\n").is_empty());
    }

    #[test]
    fn test_run_tool_missing_binary() {
        let err = run_tool("pacsweep-no-such-tool-xyz", &[]).unwrap_err();
        assert!(err.to_string().contains("Failed to run"));
    }
}
