//! Base error types for hookmsg
//!
//! This module provides the foundation error types that all crates can use.

use std::path::PathBuf;
use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// Hook script could not be written or removed
    #[error("Hook script error at {}: {source}", path.display())]
    HookScript {
        /// Script or hooks directory path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// External git invocation failed
    #[error("Git error: {0}")]
    Git(String),

    /// Hook name not recognized
    #[error("Unknown hook: {0}")]
    UnknownHook(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
