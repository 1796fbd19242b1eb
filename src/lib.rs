//! # pacsweep
//!
//! An interactive disk-cleanup utility for Arch Linux.
//!
//! pacsweep sequences the routine maintenance chores an Arch system
//! accumulates behind simple yes/no prompts:
//!
//! - **Cache pruning**: drops cached versions of uninstalled packages and
//!   trims installed ones to a configured retention count via `paccache`
//! - **Orphan removal**: removes packages nothing depends on anymore
//! - **Stale-file cleanup**: deletes broken symlinks and prompts for
//!   `.bak`/`.old`/`~` leftovers under your config, cache, and data dirs
//! - **Journal optimization**: vacuums systemd's journal by size and age
//! - **Prompt-gated**: every step defaults to "no", so declining
//!   everything touches nothing
//! - **Stop on first error**: a failing tool aborts the rest of the run

pub mod cli;
pub mod common;
pub mod sweep;
pub mod system;
