//! Integration tests for hook installation and removal

use hookmsg_core::HookKind;
use hookmsg_engine::{HookInstaller, HookState, InstallOutcome, UninstallOutcome};
use std::fs;
use tempfile::TempDir;

const CUSTOM_HOOK: &str = "#!/bin/sh\nnpm test\n";

#[test]
fn test_install_creates_missing_hooks_dir() {
    let temp = TempDir::new().unwrap();
    let hooks_dir = temp.path().join(".git/hooks");
    let installer = HookInstaller::new(&hooks_dir);

    let outcomes = installer.install(false, "hookmsg").unwrap();

    assert_eq!(outcomes.len(), 5);
    assert!(
        outcomes
            .iter()
            .all(|(_, outcome)| *outcome == InstallOutcome::Installed)
    );
    for kind in HookKind::ALL {
        assert!(hooks_dir.join(kind.git_name()).is_file());
    }
}

#[test]
fn test_install_keeps_existing_without_force() {
    let temp = TempDir::new().unwrap();
    let installer = HookInstaller::new(temp.path());
    fs::write(installer.hook_path(HookKind::PreCommit), CUSTOM_HOOK).unwrap();

    let outcomes = installer.install(false, "hookmsg").unwrap();

    assert_eq!(
        outcomes[0],
        (HookKind::PreCommit, InstallOutcome::SkippedExisting)
    );
    assert_eq!(
        fs::read_to_string(installer.hook_path(HookKind::PreCommit)).unwrap(),
        CUSTOM_HOOK
    );
    assert_eq!(
        installer.state(HookKind::PrePush).unwrap(),
        HookState::Managed
    );
}

#[test]
fn test_force_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let installer = HookInstaller::new(temp.path());
    fs::write(installer.hook_path(HookKind::PreCommit), CUSTOM_HOOK).unwrap();

    let outcomes = installer.install(true, "hookmsg").unwrap();

    assert_eq!(outcomes[0], (HookKind::PreCommit, InstallOutcome::Overwritten));
    assert_eq!(outcomes[1], (HookKind::PrePush, InstallOutcome::Installed));
    assert_eq!(
        installer.state(HookKind::PreCommit).unwrap(),
        HookState::Managed
    );
}

#[test]
fn test_uninstall_never_removes_custom_hooks() {
    let temp = TempDir::new().unwrap();
    let installer = HookInstaller::new(temp.path());
    installer.install(false, "hookmsg").unwrap();
    fs::write(installer.hook_path(HookKind::PostMerge), CUSTOM_HOOK).unwrap();
    fs::remove_file(installer.hook_path(HookKind::PreRebase)).unwrap();

    let outcomes = installer.uninstall().unwrap();

    assert_eq!(
        outcomes,
        vec![
            (HookKind::PreCommit, UninstallOutcome::Removed),
            (HookKind::PrePush, UninstallOutcome::Removed),
            (HookKind::PostCommit, UninstallOutcome::Removed),
            (HookKind::PostMerge, UninstallOutcome::NotManaged),
            (HookKind::PreRebase, UninstallOutcome::Missing),
        ]
    );
    assert!(installer.hook_path(HookKind::PostMerge).exists());
    assert!(!installer.hook_path(HookKind::PreCommit).exists());
}

#[test]
fn test_inspect_reports_every_slot() {
    let temp = TempDir::new().unwrap();
    let installer = HookInstaller::new(temp.path());
    fs::write(installer.hook_path(HookKind::PostCommit), CUSTOM_HOOK).unwrap();

    let states = installer.inspect().unwrap();
    let kinds: Vec<_> = states.iter().map(|(kind, _)| *kind).collect();

    assert_eq!(kinds, HookKind::ALL.to_vec());
    assert_eq!(states[2], (HookKind::PostCommit, HookState::Custom));
    assert_eq!(states[0], (HookKind::PreCommit, HookState::Missing));
}
