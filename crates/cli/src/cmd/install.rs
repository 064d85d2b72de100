//! Install command
//!
//! Writes a trampoline into every managed hook slot.

use clap::Args;
use hookmsg_engine::InstallOutcome;
use owo_colors::OwoColorize;

use crate::command::Command;
use crate::common::{RuntimeContext, hook_program};
use crate::error::Result;
use crate::ui::StatusIcon;

/// Install git hooks with message support
#[derive(Debug, Args)]
pub struct InstallCommand {
    /// Overwrite hooks that already exist
    #[arg(short, long)]
    pub force: bool,
}

impl Command for InstallCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        context.require_repository()?;

        let installer = context.installer()?;
        let program = hook_program();
        tracing::debug!(hooks_dir = %installer.hooks_dir().display(), %program, "Installing hooks");

        for (kind, outcome) in installer.install(self.force, &program)? {
            match outcome {
                InstallOutcome::Installed | InstallOutcome::Overwritten => {
                    println!(
                        "{}",
                        format!("{} Installed {kind} hook", StatusIcon::Success.get()).green()
                    );
                }
                InstallOutcome::SkippedExisting => {
                    println!(
                        "{}",
                        format!(
                            "{} Hook {kind} already exists. Use --force to overwrite.",
                            StatusIcon::Warning.get()
                        )
                        .yellow()
                    );
                }
            }
        }

        println!(
            "{}",
            format!("\n{} Git hooks installed successfully!", StatusIcon::Celebrate.get()).blue()
        );
        println!(
            "{}",
            "Create a .git-messagesrc file to configure your messages.".bright_black()
        );

        Ok(())
    }
}
