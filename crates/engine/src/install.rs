//! Trampoline script installation
//!
//! Every managed hook slot gets a tiny shell script that forwards to
//! `hookmsg run <hook>`. Scripts carry [`HOOK_MARKER`] so that uninstall only
//! ever removes files hookmsg wrote itself.

use hookmsg_core::{Error, HookKind, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Marker comment identifying scripts written by hookmsg
pub const HOOK_MARKER: &str = "Git Hook Messages";

/// Provenance of a hook slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    /// Trampoline written by hookmsg
    Managed,
    /// Some other script
    Custom,
    /// No file in the slot
    Missing,
}

/// Result of installing one hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Slot was empty and now holds the trampoline
    Installed,
    /// An existing script was replaced (`--force`)
    Overwritten,
    /// An existing script was left alone
    SkippedExisting,
}

/// Result of uninstalling one hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UninstallOutcome {
    /// Trampoline removed
    Removed,
    /// Script not written by hookmsg, kept
    NotManaged,
    /// Nothing to remove
    Missing,
}

/// Render the trampoline script for a hook
///
/// Hooks that prompt reattach stdin to the controlling terminal when one can
/// be opened, since git hands `pre-push` its ref list on stdin.
#[must_use]
pub fn trampoline_script(kind: HookKind, program: &str) -> String {
    let mut script = format!("#!/bin/sh\n# {HOOK_MARKER} - {}\n", kind.git_name());
    script.push_str("# Managed by hookmsg. Remove with `hookmsg uninstall`.\n");

    if kind.requires_confirmation() {
        script.push_str("if (exec < /dev/tty) 2>/dev/null; then\n    exec < /dev/tty\nfi\n");
    }

    script.push_str(&format!(
        "exec {} run {} \"$@\"\n",
        shell_quote(program),
        kind.git_name()
    ));
    script
}

/// Single-quote a string for POSIX sh
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Installs, inspects and removes hookmsg trampolines in a hooks directory
#[derive(Debug, Clone)]
pub struct HookInstaller {
    hooks_dir: PathBuf,
}

impl HookInstaller {
    /// Create an installer for the given hooks directory
    #[must_use]
    pub fn new(hooks_dir: impl Into<PathBuf>) -> Self {
        Self {
            hooks_dir: hooks_dir.into(),
        }
    }

    /// The hooks directory
    #[must_use]
    pub fn hooks_dir(&self) -> &Path {
        &self.hooks_dir
    }

    /// Path of the script for a hook slot
    #[must_use]
    pub fn hook_path(&self, kind: HookKind) -> PathBuf {
        self.hooks_dir.join(kind.git_name())
    }

    /// Determine who owns a hook slot
    pub fn state(&self, kind: HookKind) -> Result<HookState> {
        let path = self.hook_path(kind);
        if !path.exists() {
            return Ok(HookState::Missing);
        }

        let content = fs::read(&path).map_err(|source| Error::HookScript {
            path: path.clone(),
            source,
        })?;
        if String::from_utf8_lossy(&content).contains(HOOK_MARKER) {
            Ok(HookState::Managed)
        } else {
            Ok(HookState::Custom)
        }
    }

    /// State of every managed slot, in installation order
    pub fn inspect(&self) -> Result<Vec<(HookKind, HookState)>> {
        HookKind::ALL
            .into_iter()
            .map(|kind| Ok((kind, self.state(kind)?)))
            .collect()
    }

    /// Write trampolines into every slot
    ///
    /// Existing scripts (managed or not) are only replaced with `force`.
    /// `program` is the command the trampoline executes.
    pub fn install(&self, force: bool, program: &str) -> Result<Vec<(HookKind, InstallOutcome)>> {
        fs::create_dir_all(&self.hooks_dir).map_err(|source| Error::HookScript {
            path: self.hooks_dir.clone(),
            source,
        })?;

        let mut outcomes = Vec::with_capacity(HookKind::ALL.len());
        for kind in HookKind::ALL {
            let path = self.hook_path(kind);
            let exists = path.exists();

            if exists && !force {
                tracing::debug!(hook = %kind, "Hook exists, skipping");
                outcomes.push((kind, InstallOutcome::SkippedExisting));
                continue;
            }

            write_executable(&path, &trampoline_script(kind, program))?;
            tracing::debug!(hook = %kind, path = %path.display(), "Installed hook");

            let outcome = if exists {
                InstallOutcome::Overwritten
            } else {
                InstallOutcome::Installed
            };
            outcomes.push((kind, outcome));
        }

        Ok(outcomes)
    }

    /// Remove every trampoline written by hookmsg
    ///
    /// Scripts without [`HOOK_MARKER`] are never touched.
    pub fn uninstall(&self) -> Result<Vec<(HookKind, UninstallOutcome)>> {
        let mut outcomes = Vec::with_capacity(HookKind::ALL.len());
        for kind in HookKind::ALL {
            let outcome = match self.state(kind)? {
                HookState::Managed => {
                    let path = self.hook_path(kind);
                    fs::remove_file(&path)
                        .map_err(|source| Error::HookScript { path, source })?;
                    UninstallOutcome::Removed
                }
                HookState::Custom => UninstallOutcome::NotManaged,
                HookState::Missing => UninstallOutcome::Missing,
            };
            outcomes.push((kind, outcome));
        }

        Ok(outcomes)
    }
}

/// Write a script and mark it executable
fn write_executable(path: &Path, content: &str) -> Result<()> {
    let map_err = |source| Error::HookScript {
        path: path.to_path_buf(),
        source,
    };

    fs::write(path, content).map_err(map_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(map_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_trampoline_contents() {
        let script = trampoline_script(HookKind::PreCommit, "/usr/local/bin/hookmsg");

        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains("# Git Hook Messages - pre-commit"));
        assert!(script.contains("exec '/usr/local/bin/hookmsg' run pre-commit \"$@\""));
        assert!(!script.contains("/dev/tty"));
    }

    #[test]
    fn test_prompting_hooks_reattach_tty() {
        for kind in [HookKind::PrePush, HookKind::PreRebase] {
            let script = trampoline_script(kind, "hookmsg");
            assert!(script.contains("exec < /dev/tty"), "{kind}");
        }
    }

    #[test]
    fn test_shell_quote_escapes_single_quotes() {
        assert_eq!(shell_quote("/opt/it's/hookmsg"), r"'/opt/it'\''s/hookmsg'");
        assert_eq!(shell_quote("/a b/c"), "'/a b/c'");
    }

    #[test]
    fn test_state_detection() {
        let temp = TempDir::new().unwrap();
        let installer = HookInstaller::new(temp.path());

        assert_eq!(installer.state(HookKind::PrePush).unwrap(), HookState::Missing);

        fs::write(installer.hook_path(HookKind::PrePush), "#!/bin/sh\nexit 0\n").unwrap();
        assert_eq!(installer.state(HookKind::PrePush).unwrap(), HookState::Custom);

        fs::write(
            installer.hook_path(HookKind::PrePush),
            trampoline_script(HookKind::PrePush, "hookmsg"),
        )
        .unwrap();
        assert_eq!(installer.state(HookKind::PrePush).unwrap(), HookState::Managed);
    }

    #[cfg(unix)]
    #[test]
    fn test_installed_scripts_are_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let installer = HookInstaller::new(temp.path());
        installer.install(false, "hookmsg").unwrap();

        let mode = fs::metadata(installer.hook_path(HookKind::PostMerge))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
