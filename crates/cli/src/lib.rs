//! hookmsg CLI library
//!
//! This library contains all the CLI logic for hookmsg, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod command;
pub mod common;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use command::Command;
use common::RuntimeContext;

/// hookmsg - friendly reminders during git operations
#[derive(Parser)]
#[command(name = "hookmsg")]
#[command(about = "Add friendly or informative messages to git operations")]
#[command(version)]
#[command(long_about = "Add friendly or informative messages to git operations

Reminders are read from the nearest .git-messagesrc file and shown when git
runs the installed hooks. pre-push and pre-rebase ask for confirmation before
the operation continues.

Hooks:
  • pre-commit, post-commit, post-merge: show reminders
  • pre-push, pre-rebase: show reminders and ask to continue")]
pub struct Cli {
    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging hooks)
    #[arg(long, env = "HOOKMSG_LOG_FILE", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colors in hook messages
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for hookmsg CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Install git hooks with message support
    Install(cmd::install::InstallCommand),

    /// Remove git hooks installed by hookmsg
    Uninstall(cmd::uninstall::UninstallCommand),

    /// Test a hook without running the git operation
    #[command(long_about = "Test a hook without running the git operation

Prints the messages the hook would show for the current branch. Never asks
for confirmation. Exits 0 when the hook would let the operation continue.

Examples:
  • hookmsg test pre-push
  • hookmsg test prePush")]
    Test(cmd::test_hook::TestCommand),

    /// Create a sample .git-messagesrc.json
    Init(cmd::init::InitCommand),

    /// Show current configuration and hook status
    Status(cmd::status::StatusCommand),

    /// Run a hook (invoked by the installed scripts)
    #[command(hide = true)]
    Run(cmd::run::RunCommand),
}

/// Main entry point for the CLI logic
///
/// Returns the process exit code: hook commands fail when the operation
/// should not proceed.
pub fn run(cli: Cli) -> Result<ExitCode> {
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let context = RuntimeContext::from_current_dir(cli.no_color)?;
    tracing::debug!(work_dir = %context.work_dir().display(), "Starting");

    let proceed = match &cli.command {
        Commands::Install(command) => {
            command.execute(&context)?;
            true
        }
        Commands::Uninstall(command) => {
            command.execute(&context)?;
            true
        }
        Commands::Init(command) => {
            command.execute(&context)?;
            true
        }
        Commands::Status(command) => {
            command.execute(&context)?;
            true
        }
        Commands::Test(command) => command.execute(&context)?,
        Commands::Run(command) => command.execute(&context)?,
    };

    Ok(if proceed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
