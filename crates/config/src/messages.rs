//! Message resolution
//!
//! Merges branch-rule messages and general hook messages into the ordered
//! list shown for a hook.

use crate::config::{ConfigFile, MessageOptions, load_config};
use crate::matcher::matches_branch_pattern;
use hookmsg_core::HookContext;
use std::path::Path;

impl ConfigFile {
    /// Messages for `hook_name` on `branch`
    ///
    /// Branch rules are visited in file order and every matching rule
    /// contributes its messages for the hook; general `hooks` messages come
    /// last. Nothing is deduplicated. Rules are skipped when `branch` is
    /// `None` or empty, or when `branchSpecific` is off.
    #[must_use]
    pub fn messages_for(&self, hook_name: &str, branch: Option<&str>) -> Vec<String> {
        let mut messages = Vec::new();

        if let Some(rules) = &self.branch_rules
            && let Some(branch) = branch.filter(|b| !b.is_empty())
            && self.options().branch_specific()
        {
            for (pattern, rule) in rules {
                if matches_branch_pattern(branch, pattern)
                    && let Some(rule_messages) = rule.get(hook_name)
                {
                    tracing::debug!(pattern = %pattern, hook = hook_name, "Branch rule matched");
                    messages.extend(rule_messages.iter().cloned());
                }
            }
        }

        if let Some(general) = self.hooks.get(hook_name) {
            messages.extend(general.iter().cloned());
        }

        messages
    }
}

/// Messages for one hook invocation plus the options that govern them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Ordered messages, branch rules first
    pub messages: Vec<String>,
    /// Effective options of the config the messages came from
    pub options: MessageOptions,
}

/// Load the closest config once and resolve everything a hook needs
///
/// A missing or broken config resolves to no messages and default options.
#[must_use]
pub fn resolve_hook(start_dir: &Path, hook_name: &str, context: Option<&HookContext>) -> Resolution {
    load_config(start_dir).map_or_else(Resolution::default, |config| Resolution {
        messages: config.messages_for(hook_name, context.map(|c| c.branch.as_str())),
        options: config.options(),
    })
}

/// Load the closest config and resolve the messages for a hook
///
/// Returns an empty list when no usable config exists.
#[must_use]
pub fn hook_messages(start_dir: &Path, hook_name: &str, context: Option<&HookContext>) -> Vec<String> {
    resolve_hook(start_dir, hook_name, context).messages
}
