//! Init command
//!
//! Writes a sample `.git-messagesrc.json` to start from.

use anyhow::Context;
use clap::Args;
use hookmsg_config::ConfigFile;
use owo_colors::OwoColorize;
use std::fs;
use std::path::PathBuf;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::{CommandError, Result};
use crate::ui::{Icons, StatusIcon};

/// File name `init` writes
pub const SAMPLE_CONFIG_NAME: &str = ".git-messagesrc.json";

/// Create a sample configuration file
#[derive(Debug, Args)]
pub struct InitCommand;

impl Command for InitCommand {
    type Output = PathBuf;

    fn execute(&self, context: &RuntimeContext) -> Result<PathBuf> {
        let path = context.work_dir().join(SAMPLE_CONFIG_NAME);
        if path.exists() {
            return Err(CommandError::FileAlreadyExists(path));
        }

        let content = ConfigFile::sample()
            .to_json_pretty()
            .context("Failed to serialize sample config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        println!(
            "{}",
            format!("{} Created {SAMPLE_CONFIG_NAME}", StatusIcon::Success.get()).green()
        );
        println!(
            "{}",
            format!("\n{} Edit the file to customize your messages!", Icons::MEMO).blue()
        );

        Ok(path)
    }
}
