//! Config loading errors
//!
//! These never cross the public `load_config` contract: the loader reports
//! them and degrades to "no configuration". They are exposed for callers of
//! `try_load_config` and for tests.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a config file
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid JSON
    #[error("Failed to parse config file {} as JSON: {source}", path.display())]
    Json {
        /// Config file path
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// File is not valid YAML
    #[error("Failed to parse config file {} as YAML: {source}", path.display())]
    Yaml {
        /// Config file path
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_yaml::Error,
    },

    /// Document parsed but has the wrong shape
    #[error("Invalid config in {}: {reason}", path.display())]
    Invalid {
        /// Config file path
        path: PathBuf,
        /// What is wrong with the document
        reason: String,
    },
}

impl ConfigError {
    /// Path of the config file the error refers to
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. }
            | Self::Json { path, .. }
            | Self::Yaml { path, .. }
            | Self::Invalid { path, .. } => path,
        }
    }
}
