//! # API Facade
//!
//! The single programmatic entry point. UI clients (the CLI, a build script,
//! tests) call [`extract`] with an [`ExtractConfig`] and get a [`CmdResult`]
//! back; nothing here prints.
//!
//! The facade validates the config, then dispatches to the command layer.

use crate::commands;
use crate::config::ExtractConfig;
use crate::error::Result;

/// Runs one extraction: scan the patterns, collect tagged blocks, write docs.
pub fn extract(config: &ExtractConfig) -> Result<CmdResult> {
    config.validate()?;
    commands::extract::run(config)
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::config::Markers;
