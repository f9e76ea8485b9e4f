//! # Scratchy Architecture
//!
//! Scratchy pulls user-facing documentation out of source comments and drops it
//! into a directory of plain text files, ready for whatever formatter you like
//! (AsciiDoc, Markdown, ...). It does not care about the format of the text.
//!
//! A block is picked up when its opening comment carries a tag:
//!
//! ```text
//! /** @scratch /intro/welcome/1
//!  * This line lands in <output>/intro/welcome.txt
//!  */
//! ```
//!
//! The path before the last `/` names the document; the token after it orders
//! the blocks that share a document, across every scanned file.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, merges the config file, prints output  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Validates the config, dispatches to the command          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/extract.rs)                        │
//! │  - Scanner → BlockParser → FragmentStore → Writer           │
//! │  - Returns a CmdResult with messages, never prints          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything runs on one thread, one file at a time. The store of fragments is
//! built fresh for every run and dropped at the end of it.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: The extraction pipeline and its result types
//! - [`config`]: Run configuration and comment markers
//! - [`scanner`]: Glob expansion into an ordered file list
//! - [`tag`]: `@scratch` tag recognition
//! - [`parser`]: Per-file block state machine
//! - [`store`]: Fragment accumulator
//! - [`writer`]: Output file materialization
//! - [`model`]: Output paths, order keys, chunks
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod scanner;
pub mod store;
pub mod tag;
pub mod writer;
