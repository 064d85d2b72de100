//! Branch pattern matching for `branchRules`
//!
//! Four forms are supported:
//!
//! | pattern     | matches                        |
//! |-------------|--------------------------------|
//! | `*`         | every branch                   |
//! | `main`      | exactly `main`                 |
//! | `*-hotfix`  | branches ending in `-hotfix`   |
//! | `feature/*` | branches starting `feature/`   |

/// Check if `branch` matches a branch rule `pattern`
#[must_use]
pub fn matches_branch_pattern(branch: &str, pattern: &str) -> bool {
    if pattern == "*" || pattern == branch {
        return true;
    }

    if let Some(suffix) = pattern.strip_prefix('*')
        && branch.ends_with(suffix)
    {
        return true;
    }

    pattern
        .strip_suffix('*')
        .is_some_and(|prefix| branch.starts_with(prefix))
}
