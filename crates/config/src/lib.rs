//! Message configuration for hookmsg
//!
//! This crate handles:
//! - Discovery of `.git-messagesrc` files from a directory upward
//! - JSON and YAML parsing with shape validation
//! - Branch pattern matching
//! - Resolving the ordered message list for a hook

pub mod config;
pub mod error;
pub mod matcher;
pub mod messages;

// Re-export error types from core
pub use hookmsg_core::{Error, Result};

pub use config::{
    CONFIG_FILE_NAMES, ConfigFile, ConfigFormat, HookMessages, LoadedConfig, MessageOptions,
    find_config_file, load_config, try_load_config,
};
pub use error::ConfigError;
pub use matcher::matches_branch_pattern;
pub use messages::{Resolution, hook_messages, resolve_hook};
