use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global pacsweep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Cached versions to retain per installed package
    #[serde(default = "default_keep_versions")]
    pub keep_versions: u32,

    /// Journal size cap passed to journalctl --vacuum-size
    #[serde(default = "default_journal_max_size")]
    pub journal_max_size: String,

    /// Directories scanned for broken symlinks and backup leftovers
    #[serde(default = "default_stale_dirs")]
    pub stale_dirs: Vec<PathBuf>,
}

fn default_keep_versions() -> u32 {
    2
}

fn default_journal_max_size() -> String {
    "500M".to_string()
}

fn default_stale_dirs() -> Vec<PathBuf> {
    // ~/.config, ~/.cache, ~/.local/share on Linux
    [dirs::config_dir(), dirs::cache_dir(), dirs::data_dir()]
        .into_iter()
        .flatten()
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keep_versions: default_keep_versions(),
            journal_max_size: default_journal_max_size(),
            stale_dirs: default_stale_dirs(),
        }
    }
}

impl Config {
    /// Get the pacsweep config directory (~/.config/pacsweep)
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("pacsweep")
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load config from file, or fall back to defaults if not present
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        let dir = path.parent().unwrap();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config dir: {}", dir.display()))?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Set a configuration value by key. stale_dirs takes a
    /// comma-separated list of paths.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "keep_versions" => {
                self.keep_versions = value
                    .parse()
                    .with_context(|| format!("keep_versions must be an integer, got '{}'", value))?
            }
            "journal_max_size" => self.journal_max_size = value.to_string(),
            "stale_dirs" => {
                self.stale_dirs = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from)
                    .collect()
            }
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
        Ok(())
    }
}
