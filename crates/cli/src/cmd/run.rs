//! Run command
//!
//! Entry point of the installed trampolines. Exit status is the verdict.

use clap::Args;
use hookmsg_core::HookKind;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::dispatch::handle_hook;
use crate::error::{CommandError, Result};
use crate::ui::MessagePresenter;

/// Run a managed hook (invoked by git)
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Hook slot name
    pub hook: String,

    /// Arguments git passes to the hook
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl RunCommand {
    /// The managed hook this invocation targets
    pub fn kind(&self) -> Result<HookKind> {
        self.hook.parse::<HookKind>().map_err(|e| {
            tracing::debug!("Rejected hook name: {e}");
            CommandError::UnknownHook(self.hook.clone())
        })
    }
}

impl Command for RunCommand {
    type Output = bool;

    fn execute(&self, context: &RuntimeContext) -> Result<bool> {
        let kind = self.kind()?;
        tracing::debug!(hook = %kind, args = ?self.args, "Hook invoked");

        let mut presenter = MessagePresenter::stdio(context.color);
        Ok(handle_hook(
            &context.git,
            context.work_dir(),
            kind.config_key(),
            kind.requires_confirmation(),
            &mut presenter,
        ))
    }
}
