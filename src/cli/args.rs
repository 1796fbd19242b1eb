use clap::{Parser, Subcommand, ValueEnum};

/// pacsweep, an interactive disk-cleanup utility for Arch Linux
#[derive(Parser, Debug)]
#[command(
    name = "pacsweep",
    version,
    about = "An interactive disk-cleanup utility for Arch Linux",
    long_about = "pacsweep walks you through routine Arch maintenance: pruning the\n\
                   pacman cache, removing orphaned dependencies, sweeping stale\n\
                   dotfile leftovers, and vacuuming the systemd journal.",
    after_help = "EXAMPLES:\n  \
        sudo pacsweep                          Full interactive cleanup\n  \
        sudo pacsweep --yes                    Run everything unattended\n  \
        sudo pacsweep cache                    Prune the package cache only\n  \
        sudo pacsweep orphans                  Remove orphaned dependencies\n  \
        sudo pacsweep stale                    Sweep broken symlinks and backups\n  \
        sudo pacsweep journal                  Vacuum and rotate the journal\n  \
        pacsweep stats                         Show disk and memory usage\n  \
        pacsweep stats --json                  Same, machine-readable\n  \
        pacsweep config show                   Print the active configuration\n  \
        pacsweep config set keep_versions 3    Keep 3 cached versions"
)]
pub struct Cli {
    /// With no subcommand, the full prompt-gated cleanup runs
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode, minimal output
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prune the pacman package cache
    Cache,

    /// Remove orphaned dependencies
    Orphans,

    /// Remove broken symlinks and backup leftovers from user directories
    Stale,

    /// Vacuum and rotate the systemd journal
    Journal,

    /// Show disk and memory usage
    Stats {
        /// Machine-readable JSON output
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset to default configuration
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },

    /// Write the default configuration file
    Init,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
