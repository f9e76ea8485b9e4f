//! # CLI Layer
//!
//! One client of the library. This is the only place that:
//! - Parses arguments (clap, see `setup.rs`)
//! - Reads the optional `--config` JSON file and lays flags over it
//! - Prints messages to the terminal (`print.rs`)
//!
//! Errors bubble up to `main.rs`, which reports them through [`print_error`]
//! and exits non-zero.
//!
//! ## Usage
//!
//! ```text
//! scratchy -o docs -p 'src/**/*.js'
//! scratchy -uo docs -p index.js -x .asciidoc
//! scratchy -c scratchy.json -o build/docs
//! ```

mod print;
mod setup;

use clap::Parser;
use print::print_messages;
use scratchy::api::{self, CmdMessage};
use scratchy::config::ExtractConfig;
use scratchy::error::{Result, ScratchyError};
use setup::Cli;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(cli)?;
    let result = api::extract(&config)?;
    print_messages(&result.messages);
    Ok(())
}

/// Reports a run-ending error on stderr.
pub fn print_error(err: &ScratchyError) {
    print_messages(&[CmdMessage::error(format!("Error: {}", err))]);
}

/// Starts from the config file (or defaults) and applies any flag given.
fn build_config(cli: Cli) -> Result<ExtractConfig> {
    let mut config = match &cli.config {
        Some(path) => ExtractConfig::load(path)?,
        None => ExtractConfig::default(),
    };

    if let Some(output) = cli.output {
        config.output = output;
    }
    if !cli.pattern.is_empty() {
        config.pattern = cli.pattern;
    }
    if let Some(begin) = cli.begin {
        config.markers.begin = begin;
    }
    if let Some(end) = cli.end {
        config.markers.end = end;
    }
    if let Some(line) = cli.line {
        config.markers.line = line;
    }
    if let Some(strip) = cli.strip {
        config.markers.strip = strip;
    }
    if let Some(extension) = cli.extension {
        config.extension = extension;
    }
    config.markers.unslash |= cli.unslash;

    Ok(config)
}
