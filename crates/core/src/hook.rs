//! Managed git hooks
//!
//! hookmsg manages a fixed set of five git hook slots. Each slot has two
//! spellings: the git file name (`pre-push`) and the config key used in
//! `.git-messagesrc` files (`prePush`).

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// A git hook slot managed by hookmsg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// Runs before a commit is created
    PreCommit,
    /// Runs before refs are pushed to a remote
    PrePush,
    /// Runs after a commit is created
    PostCommit,
    /// Runs after a successful merge
    PostMerge,
    /// Runs before a rebase starts
    PreRebase,
}

impl HookKind {
    /// All managed hooks, in installation order
    pub const ALL: [Self; 5] = [
        Self::PreCommit,
        Self::PrePush,
        Self::PostCommit,
        Self::PostMerge,
        Self::PreRebase,
    ];

    /// File name of the hook inside the git hooks directory
    #[must_use]
    pub const fn git_name(self) -> &'static str {
        match self {
            Self::PreCommit => "pre-commit",
            Self::PrePush => "pre-push",
            Self::PostCommit => "post-commit",
            Self::PostMerge => "post-merge",
            Self::PreRebase => "pre-rebase",
        }
    }

    /// Key of the hook in the `hooks` section of a config file
    #[must_use]
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::PreCommit => "preCommit",
            Self::PrePush => "prePush",
            Self::PostCommit => "postCommit",
            Self::PostMerge => "postMerge",
            Self::PreRebase => "preRebase",
        }
    }

    /// Whether the hook asks for confirmation before git continues
    ///
    /// Fixed policy: only `pre-push` and `pre-rebase` prompt.
    #[must_use]
    pub const fn requires_confirmation(self) -> bool {
        matches!(self, Self::PrePush | Self::PreRebase)
    }

    /// Whether the hook fires after the git operation already happened
    #[must_use]
    pub const fn is_post_action(self) -> bool {
        matches!(self, Self::PostCommit | Self::PostMerge)
    }

    /// Look up a hook by either its git name or its config key
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.git_name() == name || kind.config_key() == name)
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.git_name())
    }
}

impl FromStr for HookKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::UnknownHook(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_spellings() {
        assert_eq!("pre-push".parse::<HookKind>().unwrap(), HookKind::PrePush);
        assert_eq!("prePush".parse::<HookKind>().unwrap(), HookKind::PrePush);
        assert_eq!(
            "post-merge".parse::<HookKind>().unwrap(),
            HookKind::PostMerge
        );
        assert!("commit-msg".parse::<HookKind>().is_err());
        assert!("PrePush".parse::<HookKind>().is_err());
    }

    #[test]
    fn test_parse_error_names_the_hook() {
        let err = "commit-msg".parse::<HookKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownHook(ref name) if name == "commit-msg"));
    }

    #[test]
    fn test_confirmation_policy() {
        let confirming: Vec<_> = HookKind::ALL
            .into_iter()
            .filter(|k| k.requires_confirmation())
            .collect();
        assert_eq!(confirming, vec![HookKind::PrePush, HookKind::PreRebase]);
    }

    #[test]
    fn test_post_action_hooks() {
        assert!(HookKind::PostCommit.is_post_action());
        assert!(HookKind::PostMerge.is_post_action());
        assert!(!HookKind::PreCommit.is_post_action());
    }

    #[test]
    fn test_display_uses_git_name() {
        assert_eq!(HookKind::PreRebase.to_string(), "pre-rebase");
    }
}
