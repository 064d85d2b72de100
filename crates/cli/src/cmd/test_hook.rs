//! Test command
//!
//! Dry run of a hook: same messages as the real invocation, never prompts.

use clap::Args;
use hookmsg_core::HookKind;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::dispatch::handle_hook;
use crate::error::Result;
use crate::ui::MessagePresenter;

/// Show the messages a hook would print without running the git operation
#[derive(Debug, Args)]
pub struct TestCommand {
    /// Hook to test (e.g. pre-push or prePush)
    pub hook: String,
}

impl TestCommand {
    /// Config key the messages are looked up under
    ///
    /// Managed hooks map to their config key in either spelling; any other
    /// name is used as written.
    pub fn config_key(&self) -> String {
        HookKind::from_name(&self.hook)
            .map_or_else(|| self.hook.clone(), |kind| kind.config_key().to_string())
    }
}

impl Command for TestCommand {
    type Output = bool;

    fn execute(&self, context: &RuntimeContext) -> Result<bool> {
        let mut presenter = MessagePresenter::stdio(context.color);
        Ok(handle_hook(
            &context.git,
            context.work_dir(),
            &self.config_key(),
            false,
            &mut presenter,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(hook: &str) -> String {
        TestCommand {
            hook: hook.to_string(),
        }
        .config_key()
    }

    #[test]
    fn test_config_key_mapping() {
        assert_eq!(key("pre-push"), "prePush");
        assert_eq!(key("prePush"), "prePush");
        assert_eq!(key("post-merge"), "postMerge");
        assert_eq!(key("deploy"), "deploy");
    }
}
