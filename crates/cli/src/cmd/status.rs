//! Status command
//!
//! Shows the discovered config, the provenance of every hook slot and the
//! context a hook would see right now.

use clap::Args;
use hookmsg_config::{MessageOptions, try_load_config};
use hookmsg_engine::{
    GitProvider, HookState, current_context, remote_url, staged_files, unstaged_files,
};
use owo_colors::OwoColorize;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;
use crate::ui::{Icons, StatusIcon};

/// Show current configuration and hook status
#[derive(Debug, Args)]
pub struct StatusCommand;

impl Command for StatusCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        println!("{}", format!("{} Git Hook Messages Status", Icons::PUZZLE).blue().bold());
        println!("{}", "─".repeat(50).bright_black());

        if !context.git.is_repository() {
            println!(
                "{}",
                format!("{} Not in a git repository", StatusIcon::Error.get()).red()
            );
            return Ok(());
        }

        print_config(context);
        print_hooks(context);
        print_context(context);

        Ok(())
    }
}

fn print_config(context: &RuntimeContext) {
    match try_load_config(context.work_dir()) {
        Ok(Some(loaded)) => {
            println!(
                "{}",
                format!("{} Configuration file found", StatusIcon::Success.get()).green()
            );
            println!("{}", format!("   Path: {}", loaded.path.display()).bright_black());

            let hooks: Vec<&str> = loaded.config.hooks.keys().map(String::as_str).collect();
            println!(
                "{}",
                format!("   Hooks configured: {}", hooks.join(", ")).bright_black()
            );

            if let Some(rules) = &loaded.config.branch_rules {
                let patterns: Vec<&str> = rules.keys().map(String::as_str).collect();
                println!(
                    "{}",
                    format!("   Branch rules: {}", patterns.join(", ")).bright_black()
                );
            }

            println!(
                "{}",
                format!("   Options: {}", describe_options(&loaded.config.options())).bright_black()
            );
        }
        Ok(None) => {
            println!(
                "{}",
                format!("{} No configuration file found", StatusIcon::Warning.get()).yellow()
            );
        }
        Err(e) => {
            println!(
                "{}",
                format!("{} Configuration file is invalid: {e}", StatusIcon::Error.get()).red()
            );
        }
    }
}

fn describe_options(options: &MessageOptions) -> String {
    format!(
        "interactive={}, branchSpecific={}, confirmBeforeBlock={}",
        options.interactive(),
        options.branch_specific(),
        options.confirm_before_block()
    )
}

fn print_hooks(context: &RuntimeContext) {
    println!("\n{}", "Git Hooks:".blue());

    let states = match context
        .installer()
        .and_then(|installer| installer.inspect().map_err(Into::into))
    {
        Ok(states) => states,
        Err(e) => {
            println!(
                "{}",
                format!("  {} Could not inspect hooks: {e}", StatusIcon::Warning.get()).yellow()
            );
            return;
        }
    };

    for (kind, state) in states {
        match state {
            HookState::Managed => println!(
                "{}",
                format!("  {} {kind} - Installed by hookmsg", StatusIcon::Success.get()).green()
            ),
            HookState::Custom => println!(
                "{}",
                format!("  {} {kind} - Custom hook", StatusIcon::Warning.get()).yellow()
            ),
            HookState::Missing => println!(
                "{}",
                format!("  {} {kind} - Not installed", StatusIcon::Error.get()).bright_black()
            ),
        }
    }
}

fn print_context(context: &RuntimeContext) {
    let git: &dyn GitProvider = &context.git;
    let snapshot = current_context(git);
    let remote = remote_url(git);

    println!("\n{}", "Current Git Context:".blue());
    for line in [
        format!("  Branch: {}", snapshot.branch),
        format!("  Main branch: {}", snapshot.is_main_branch),
        format!("  Staged changes: {}", snapshot.has_staged_changes),
        format!("  Staged files: {}", staged_files(git).len()),
        format!("  Unstaged files: {}", unstaged_files(git).len()),
        format!(
            "  Remote: {}",
            if remote.is_empty() { "(none)" } else { remote.as_str() }
        ),
    ] {
        println!("{}", line.bright_black());
    }
}
