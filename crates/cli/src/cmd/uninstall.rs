//! Uninstall command

use clap::Args;
use hookmsg_engine::UninstallOutcome;
use owo_colors::OwoColorize;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;
use crate::ui::StatusIcon;

/// Remove git hooks installed by hookmsg
///
/// Hooks written by other tools are reported and kept.
#[derive(Debug, Args)]
pub struct UninstallCommand;

impl Command for UninstallCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        context.require_repository()?;

        let installer = context.installer()?;
        for (kind, outcome) in installer.uninstall()? {
            match outcome {
                UninstallOutcome::Removed => println!(
                    "{}",
                    format!("{} Removed {kind} hook", StatusIcon::Success.get()).green()
                ),
                UninstallOutcome::NotManaged => println!(
                    "{}",
                    format!(
                        "{} {kind} hook was not installed by hookmsg",
                        StatusIcon::Warning.get()
                    )
                    .yellow()
                ),
                UninstallOutcome::Missing => {}
            }
        }

        println!(
            "{}",
            format!("\n{} Git hooks removed successfully!", StatusIcon::Celebrate.get()).blue()
        );

        Ok(())
    }
}
