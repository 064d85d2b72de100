//! Error types for CLI commands
//!
//! Structured errors for the command layer. Hook-time failures never show up
//! here: the dispatcher degrades them and turns everything into a verdict.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during command execution
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// Working directory is not inside a git repository
    #[error("Not in a git repository")]
    NotAGitRepository,

    /// File already exists
    #[error("File already exists: {0}")]
    FileAlreadyExists(PathBuf),

    /// Hook name outside the managed set
    #[error("Unknown hook: {0}")]
    UnknownHook(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the core, config or engine crates
    #[error(transparent)]
    Core(#[from] hookmsg_core::Error),

    /// Generic error with call-site context
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;
