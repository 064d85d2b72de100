//! Core types and utilities for hookmsg
//!
//! This is the foundation crate (Layer 0) that all other hookmsg crates depend on.
//! It provides:
//! - Base error types
//! - The closed set of managed git hooks (`HookKind`)
//! - The per-invocation repository snapshot (`HookContext`)
//!
//! This crate has no dependencies on other hookmsg crates.

pub mod context;
pub mod error;
pub mod hook;

pub use context::{HookContext, MAIN_BRANCHES};
pub use error::{Error, Result};
pub use hook::HookKind;
