//! Shared state for CLI commands

use hookmsg_engine::{CommandGit, GitProvider, HookInstaller};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::error::{CommandError, Result};

/// Name the trampolines fall back to when the executable path is unknown
pub const BIN_NAME: &str = "hookmsg";

/// Runtime context for CLI commands
///
/// Every command works relative to one directory. Hooks run with the
/// repository root as their working directory, so that is where config
/// discovery starts.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    /// Directory commands operate in
    pub work_dir: PathBuf,
    /// Git collaborator bound to `work_dir`
    pub git: CommandGit,
    /// Whether presented messages are styled
    pub color: bool,
}

impl RuntimeContext {
    /// Create a context for a directory
    pub fn new(work_dir: impl Into<PathBuf>, color: bool) -> Self {
        let work_dir = work_dir.into();
        Self {
            git: CommandGit::new(&work_dir),
            work_dir,
            color,
        }
    }

    /// Context for the process working directory
    pub fn from_current_dir(no_color: bool) -> Result<Self> {
        let work_dir = std::env::current_dir()?;
        Ok(Self::new(work_dir, color_enabled(no_color)))
    }

    /// Directory commands operate in
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Fail unless `work_dir` is inside a git repository
    pub fn require_repository(&self) -> Result<()> {
        if self.git.is_repository() {
            Ok(())
        } else {
            Err(CommandError::NotAGitRepository)
        }
    }

    /// Installer for the repository's hooks directory
    pub fn installer(&self) -> Result<HookInstaller> {
        Ok(HookInstaller::new(self.git.hooks_dir()?))
    }
}

/// Decide whether presented messages get ANSI styling
///
/// Off with `--no-color`, a non-empty `NO_COLOR`, or when stdout is not a
/// terminal.
pub fn color_enabled(no_color: bool) -> bool {
    !no_color
        && std::env::var_os("NO_COLOR").is_none_or(|value| value.is_empty())
        && std::io::stdout().is_terminal()
}

/// Command the trampolines should execute
pub fn hook_program() -> String {
    std::env::current_exe().map_or_else(
        |e| {
            tracing::warn!("Could not resolve executable path, using {BIN_NAME}: {e}");
            BIN_NAME.to_string()
        },
        |path| path.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!color_enabled(true));
    }

    #[test]
    fn test_context_binds_git_to_work_dir() {
        let temp = TempDir::new().unwrap();
        let context = RuntimeContext::new(temp.path(), false);

        assert_eq!(context.work_dir(), temp.path());
        assert_eq!(context.git.work_dir(), temp.path());
    }

    #[test]
    fn test_require_repository_outside_git() {
        let temp = TempDir::new().unwrap();
        let mut context = RuntimeContext::new(temp.path(), false);
        context.git = CommandGit::new(temp.path()).with_program("hookmsg-test-no-such-git");

        assert!(matches!(
            context.require_repository(),
            Err(CommandError::NotAGitRepository)
        ));
    }

    #[test]
    fn test_hook_program_is_not_empty() {
        assert!(!hook_program().is_empty());
    }
}
