//! Repository snapshot taken at hook time

/// Branch names treated as main branches
pub const MAIN_BRANCHES: [&str; 3] = ["main", "master", "develop"];

/// Placeholder used when a value could not be read from git
pub const UNKNOWN: &str = "unknown";

/// Snapshot of repository state for a single hook invocation
///
/// Built fresh every time a hook runs and never persisted. Used for
/// branch-rule selection and for placeholder substitution in messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookContext {
    /// Current branch name (empty on a detached HEAD)
    pub branch: String,
    /// Whether `branch` is one of [`MAIN_BRANCHES`]
    pub is_main_branch: bool,
    /// Whether the index contains staged changes
    pub has_staged_changes: bool,
    /// Message of the most recent commit
    pub last_commit_message: String,
}

impl HookContext {
    /// Build a context, deriving `is_main_branch` from the branch name
    #[must_use]
    pub fn new(
        branch: impl Into<String>,
        has_staged_changes: bool,
        last_commit_message: impl Into<String>,
    ) -> Self {
        let branch = branch.into();
        Self {
            is_main_branch: is_main_branch(&branch),
            branch,
            has_staged_changes,
            last_commit_message: last_commit_message.into(),
        }
    }
}

impl Default for HookContext {
    fn default() -> Self {
        Self {
            branch: UNKNOWN.to_string(),
            is_main_branch: false,
            has_staged_changes: false,
            last_commit_message: UNKNOWN.to_string(),
        }
    }
}

/// Check a branch name against [`MAIN_BRANCHES`]
#[must_use]
pub fn is_main_branch(branch: &str) -> bool {
    MAIN_BRANCHES.contains(&branch)
}
