//! Git operations abstraction layer
//!
//! hookmsg never links against libgit2: `git` is an external collaborator run
//! as a subprocess through `duct`. The [`GitProvider`] trait keeps that
//! collaborator swappable so the dispatcher can be tested without a real
//! repository.
//!
//! Trait methods report failures. The free functions in this module are the
//! hook-facing side: they never fail and substitute a documented default for
//! every query that does.

use hookmsg_core::context::UNKNOWN;
use hookmsg_core::{Error, HookContext, Result};
use std::path::{Path, PathBuf};

/// Git provider trait defining all git queries needed by hookmsg
pub trait GitProvider {
    /// Get current branch name (empty on a detached HEAD)
    ///
    /// # Errors
    ///
    /// Returns an error if `git` cannot be run or is not inside a repository
    fn current_branch(&self) -> Result<String>;

    /// List files staged in the index
    fn staged_files(&self) -> Result<Vec<String>>;

    /// List files modified in the working tree but not staged
    fn unstaged_files(&self) -> Result<Vec<String>>;

    /// Get the full message of the most recent commit
    ///
    /// # Errors
    ///
    /// Returns an error if the repository has no commits yet
    fn last_commit_message(&self) -> Result<String>;

    /// Get the URL of the `origin` remote
    fn remote_url(&self) -> Result<String>;

    /// Resolve the directory git reads hook scripts from
    ///
    /// Honors `core.hooksPath` and linked worktrees where the provider can.
    fn hooks_dir(&self) -> Result<PathBuf>;

    /// Check whether the working directory is inside a git repository
    fn is_repository(&self) -> bool;
}

/// Git provider running the `git` binary
#[derive(Debug, Clone)]
pub struct CommandGit {
    work_dir: PathBuf,
    program: String,
}

impl CommandGit {
    /// Create a provider that runs `git` in `work_dir`
    #[must_use]
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            program: "git".to_string(),
        }
    }

    /// Use a different executable instead of `git`
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Directory the commands run in
    #[must_use]
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Run git and capture stdout with trailing newlines removed
    fn read(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(program = %self.program, ?args, "Running git");
        duct::cmd(&self.program, args.iter().copied())
            .dir(&self.work_dir)
            .stderr_null()
            .read()
            .map_err(|e| Error::Git(format!("{} {}: {e}", self.program, args.join(" "))))
    }

    fn read_lines(&self, args: &[&str]) -> Result<Vec<String>> {
        Ok(self
            .read(args)?
            .lines()
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect())
    }
}

impl GitProvider for CommandGit {
    fn current_branch(&self) -> Result<String> {
        Ok(self.read(&["branch", "--show-current"])?.trim().to_string())
    }

    fn staged_files(&self) -> Result<Vec<String>> {
        self.read_lines(&["diff", "--cached", "--name-only"])
    }

    fn unstaged_files(&self) -> Result<Vec<String>> {
        self.read_lines(&["diff", "--name-only"])
    }

    fn last_commit_message(&self) -> Result<String> {
        Ok(self.read(&["log", "-1", "--pretty=%B"])?.trim().to_string())
    }

    fn remote_url(&self) -> Result<String> {
        Ok(self
            .read(&["config", "--get", "remote.origin.url"])?
            .trim()
            .to_string())
    }

    fn hooks_dir(&self) -> Result<PathBuf> {
        let raw = match self.read(&["rev-parse", "--git-path", "hooks"]) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Could not resolve hooks directory, using .git/hooks: {e}");
                return Ok(self.work_dir.join(".git").join("hooks"));
            }
        };

        let path = PathBuf::from(raw.trim());
        if path.is_absolute() {
            Ok(path)
        } else {
            Ok(self.work_dir.join(path))
        }
    }

    fn is_repository(&self) -> bool {
        self.read(&["rev-parse", "--git-dir"]).is_ok()
    }
}

/// Take a hook-time snapshot of the repository
///
/// Never fails. Each query falls back on its own, so a failing one does not
/// affect the others: branch and last message become `"unknown"`, staged
/// changes become `false`.
pub fn current_context(git: &dyn GitProvider) -> HookContext {
    let branch = git.current_branch().unwrap_or_else(|e| {
        tracing::warn!("Could not read current branch: {e}");
        UNKNOWN.to_string()
    });
    let has_staged_changes = !staged_files(git).is_empty();
    let last_commit_message = git.last_commit_message().unwrap_or_else(|e| {
        tracing::debug!("Could not read last commit message: {e}");
        UNKNOWN.to_string()
    });

    HookContext::new(branch, has_staged_changes, last_commit_message)
}

/// Staged files, or an empty list if git fails
pub fn staged_files(git: &dyn GitProvider) -> Vec<String> {
    git.staged_files().unwrap_or_else(|e| {
        tracing::warn!("Could not list staged files: {e}");
        Vec::new()
    })
}

/// Unstaged files, or an empty list if git fails
pub fn unstaged_files(git: &dyn GitProvider) -> Vec<String> {
    git.unstaged_files().unwrap_or_else(|e| {
        tracing::warn!("Could not list unstaged files: {e}");
        Vec::new()
    })
}

/// Origin URL, or an empty string if there is none
pub fn remote_url(git: &dyn GitProvider) -> String {
    git.remote_url().unwrap_or_else(|e| {
        tracing::debug!("No origin remote: {e}");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Provider where only some queries succeed
    struct PartialGit {
        branch: Option<&'static str>,
        staged: Option<Vec<&'static str>>,
        message: Option<&'static str>,
    }

    fn fail<T>() -> Result<T> {
        Err(Error::Git("boom".to_string()))
    }

    impl GitProvider for PartialGit {
        fn current_branch(&self) -> Result<String> {
            self.branch.map(ToString::to_string).map_or_else(fail, Ok)
        }

        fn staged_files(&self) -> Result<Vec<String>> {
            self.staged.as_ref().map_or_else(fail, |files| {
                Ok(files.iter().map(ToString::to_string).collect())
            })
        }

        fn unstaged_files(&self) -> Result<Vec<String>> {
            fail()
        }

        fn last_commit_message(&self) -> Result<String> {
            self.message.map(ToString::to_string).map_or_else(fail, Ok)
        }

        fn remote_url(&self) -> Result<String> {
            fail()
        }

        fn hooks_dir(&self) -> Result<PathBuf> {
            fail()
        }

        fn is_repository(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_context_from_successful_queries() {
        let git = PartialGit {
            branch: Some("main"),
            staged: Some(vec!["src/lib.rs"]),
            message: Some("feat: add parser"),
        };

        let ctx = current_context(&git);
        assert_eq!(ctx.branch, "main");
        assert!(ctx.is_main_branch);
        assert!(ctx.has_staged_changes);
        assert_eq!(ctx.last_commit_message, "feat: add parser");
    }

    #[test]
    fn test_each_query_degrades_independently() {
        let git = PartialGit {
            branch: None,
            staged: Some(vec!["a.txt"]),
            message: Some("wip"),
        };
        let ctx = current_context(&git);
        assert_eq!(ctx.branch, "unknown");
        assert!(!ctx.is_main_branch);
        assert!(ctx.has_staged_changes);
        assert_eq!(ctx.last_commit_message, "wip");

        let git = PartialGit {
            branch: Some("develop"),
            staged: None,
            message: None,
        };
        let ctx = current_context(&git);
        assert_eq!(ctx.branch, "develop");
        assert!(ctx.is_main_branch);
        assert!(!ctx.has_staged_changes);
        assert_eq!(ctx.last_commit_message, "unknown");
    }

    #[test]
    fn test_degrading_helpers() {
        let git = PartialGit {
            branch: None,
            staged: None,
            message: None,
        };
        assert!(staged_files(&git).is_empty());
        assert!(unstaged_files(&git).is_empty());
        assert_eq!(remote_url(&git), "");
    }

    #[test]
    fn test_missing_git_binary_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let git = CommandGit::new(temp.path()).with_program("hookmsg-test-no-such-git");

        assert!(!git.is_repository());
        assert!(git.current_branch().is_err());
        assert_eq!(git.hooks_dir().unwrap(), temp.path().join(".git/hooks"));
        assert_eq!(current_context(&git), HookContext::default());
    }

    #[test]
    fn test_work_dir_accessor() {
        let git = CommandGit::new("/repo");
        assert_eq!(git.work_dir(), Path::new("/repo"));
    }
}
