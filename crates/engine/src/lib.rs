//! Repository-facing operations for hookmsg
//!
//! - [`git`]: the `git` subprocess collaborator and the hook-time context reader
//! - [`install`]: writing and removing trampoline scripts in the hooks directory

pub mod git;
pub mod install;

pub use git::{
    CommandGit, GitProvider, current_context, remote_url, staged_files, unstaged_files,
};
pub use install::{HOOK_MARKER, HookInstaller, HookState, InstallOutcome, UninstallOutcome};
