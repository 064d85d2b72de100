//! Integration tests for config discovery and message resolution

use hookmsg_config::{find_config_file, hook_messages, load_config, try_load_config};
use hookmsg_core::HookContext;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_nearest_directory_wins() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a/b/c");
    fs::create_dir_all(&nested).unwrap();

    // Farther ancestor has the higher-priority name, nearer one still wins
    fs::write(
        temp.path().join(".git-messagesrc"),
        r#"{"hooks":{"preCommit":["far"]}}"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("a/b/.git-messagesrc.yml"),
        "hooks:\n  preCommit:\n    - near\n",
    )
    .unwrap();

    let found = find_config_file(&nested).unwrap();
    assert_eq!(found, temp.path().join("a/b/.git-messagesrc.yml"));

    let config = load_config(&nested).unwrap();
    assert_eq!(config.hooks["preCommit"], vec!["near"]);
}

#[test]
fn test_starting_directory_is_searched_first() {
    let temp = TempDir::new().unwrap();
    let child = temp.path().join("child");
    fs::create_dir(&child).unwrap();
    fs::write(temp.path().join(".git-messagesrc.json"), r#"{"hooks":{}}"#).unwrap();
    fs::write(child.join(".git-messagesrc.yaml"), "hooks: {}").unwrap();

    assert_eq!(
        find_config_file(&child).unwrap(),
        child.join(".git-messagesrc.yaml")
    );
    assert_eq!(
        find_config_file(temp.path()).unwrap(),
        temp.path().join(".git-messagesrc.json")
    );
}

#[test]
fn test_end_to_end_single_message() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".git-messagesrc"),
        r#"{"hooks":{"preCommit":["Test message"]}}"#,
    )
    .unwrap();

    let context = HookContext::new("main", false, "initial");
    let messages = hook_messages(temp.path(), "preCommit", Some(&context));
    assert_eq!(messages, vec!["Test message"]);
}

#[test]
fn test_invalid_json_yields_no_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".git-messagesrc.json"), "{ invalid json }").unwrap();

    assert!(try_load_config(temp.path()).is_err());
    assert!(load_config(temp.path()).is_none());
    assert!(hook_messages(temp.path(), "preCommit", None).is_empty());
}

#[test]
fn test_yaml_config_with_branch_rules() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".git-messagesrc.yaml"),
        r#"
hooks:
  prePush:
    - "✅ Did your PR pass CI?"
branchRules:
  "*-hotfix":
    prePush:
      - "🚨 Hotfix branch, ping the on-call"
"#,
    )
    .unwrap();

    let context = HookContext::new("payments-hotfix", true, "fix: rounding");
    assert_eq!(
        hook_messages(temp.path(), "prePush", Some(&context)),
        vec!["🚨 Hotfix branch, ping the on-call", "✅ Did your PR pass CI?"]
    );

    let context = HookContext::new("main", true, "fix: rounding");
    assert_eq!(
        hook_messages(temp.path(), "prePush", Some(&context)),
        vec!["✅ Did your PR pass CI?"]
    );
}

#[test]
fn test_resolve_hook_carries_options() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".git-messagesrc.json"),
        r#"{"hooks":{"prePush":["push"]},"options":{"interactive":false}}"#,
    )
    .unwrap();

    let resolution = hookmsg_config::resolve_hook(temp.path(), "prePush", None);
    assert_eq!(resolution.messages, vec!["push"]);
    assert!(!resolution.options.interactive());
}

#[test]
fn test_missing_config_resolves_to_defaults() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("repo/src");
    fs::create_dir_all(&nested).unwrap();

    assert!(find_config_file(&nested).is_none());
    assert!(load_config(&nested).is_none());
    for hook in ["preCommit", "prePush", "postCommit", "postMerge", "preRebase", "custom"] {
        assert!(hook_messages(&nested, hook, None).is_empty());
    }

    let resolution = hookmsg_config::resolve_hook(&nested, "prePush", None);
    assert!(resolution.options.interactive());
}
