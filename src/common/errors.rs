use thiserror::Error;

/// Precondition failures that abort a run before any cleanup action.
/// Operation failures (an invoked tool exiting nonzero) are reported
/// through `anyhow` with the failing tool's stderr attached.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// Destructive steps need root to touch the package database,
    /// the pacman cache, and the system journal.
    #[error("pacsweep must run as root (try: sudo pacsweep)")]
    NotRoot,

    /// A required helper binary is absent and cannot be installed.
    #[error("required tool '{tool}' was not found on PATH")]
    MissingTool { tool: String },

    /// The user declined installing the package that provides a
    /// missing helper binary.
    #[error("'{tool}' is required; installation of '{package}' was declined")]
    InstallDeclined { tool: String, package: String },
}
