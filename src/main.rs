use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pacsweep::cli::args::{Cli, Commands, CompletionShell, ConfigAction};
use pacsweep::cli::output;
use pacsweep::cli::prompt::{AssumeYes, Confirm, TerminalConfirm};
use pacsweep::common::config::Config;
use pacsweep::common::privileges;
use pacsweep::sweep;
use pacsweep::system::{self, HostSystem, SystemOps};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("pacsweep=debug")
            .init();
    }

    match cli.command {
        None => cmd_run(&cli),

        Some(Commands::Cache) => cmd_cache(&cli),
        Some(Commands::Orphans) => cmd_orphans(&cli),
        Some(Commands::Stale) => cmd_stale(&cli),
        Some(Commands::Journal) => cmd_journal(&cli),
        Some(Commands::Stats { json }) => cmd_stats(json),
        Some(Commands::Config { action }) => cmd_config(action),

        Some(Commands::Completions { shell }) => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let shell = match shell {
                CompletionShell::Bash => clap_complete::Shell::Bash,
                CompletionShell::Zsh => clap_complete::Shell::Zsh,
                CompletionShell::Fish => clap_complete::Shell::Fish,
            };
            clap_complete::generate(shell, &mut cmd, "pacsweep", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn make_confirm(cli: &Cli) -> Box<dyn Confirm> {
    if cli.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalConfirm)
    }
}

// ─── Full run ────────────────────────────────────────────────────────────────

fn cmd_run(cli: &Cli) -> Result<()> {
    let config = Config::load()?;
    let sys = HostSystem;
    let mut confirm = make_confirm(cli);

    if !cli.quiet {
        output::print_banner();
    }

    sweep::run(&config, &sys, confirm.as_mut(), !cli.quiet)?;
    Ok(())
}

// ─── Individual steps ────────────────────────────────────────────────────────

fn cmd_cache(cli: &Cli) -> Result<()> {
    let config = Config::load()?;
    let sys = HostSystem;
    let mut confirm = make_confirm(cli);

    privileges::ensure_root()?;
    system::ensure_tools(&sys, confirm.as_mut())?;

    if !confirm.confirm("Prune the pacman package cache?")? {
        println!("  {} Cancelled", "✗".red());
        return Ok(());
    }

    let report = sweep::cache::prune(&config, &sys)?;
    output::print_cache_report(&report);
    Ok(())
}

fn cmd_orphans(cli: &Cli) -> Result<()> {
    let sys = HostSystem;
    let mut confirm = make_confirm(cli);

    privileges::ensure_root()?;
    system::ensure_tools(&sys, confirm.as_mut())?;

    if !confirm.confirm("Remove orphaned dependencies?")? {
        println!("  {} Cancelled", "✗".red());
        return Ok(());
    }

    let report = sweep::orphans::remove(&sys)?;
    output::print_orphan_report(&report);
    Ok(())
}

fn cmd_stale(cli: &Cli) -> Result<()> {
    let config = Config::load()?;
    let mut confirm = make_confirm(cli);

    privileges::ensure_root()?;

    if !confirm.confirm("Clean stale files from user directories?")? {
        println!("  {} Cancelled", "✗".red());
        return Ok(());
    }

    let report = sweep::stale::sweep(&config.stale_dirs, confirm.as_mut(), !cli.quiet)?;
    output::print_stale_report(&report);
    Ok(())
}

fn cmd_journal(cli: &Cli) -> Result<()> {
    let config = Config::load()?;
    let sys = HostSystem;
    let mut confirm = make_confirm(cli);

    privileges::ensure_root()?;
    system::ensure_tools(&sys, confirm.as_mut())?;

    if !confirm.confirm("Optimize the systemd journal?")? {
        println!("  {} Cancelled", "✗".red());
        return Ok(());
    }

    sweep::journal::optimize(&config, &sys)?;
    println!("  {} Journal vacuumed and rotated", "✓".green());
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

fn cmd_stats(json: bool) -> Result<()> {
    let sys = HostSystem;
    let disk = sys.disk_stats("/")?;
    let mem = sys.memory_stats()?;

    if json {
        output::print_stats_json(&disk, &mem)?;
    } else {
        println!();
        output::print_stats(&disk, &mem);
    }
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let config = Config::default();
            config.save()?;
            println!(
                "  {} Wrote default config to {}",
                "✓".green(),
                Config::config_path().display()
            );
            Ok(())
        }
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("  {} Configuration reset to defaults", "✓".green());
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("  {} Set {} = {}", "✓".green(), key, value);
            Ok(())
        }
    }
}
