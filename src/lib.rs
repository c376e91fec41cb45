//! # protosplit
//!
//! Splits protocol declarations in a source listing into an empty
//! declaration followed by an extension block of the same name, so
//! documentation tooling can handle requirements and default
//! implementations separately.
//!
//! ## Usage
//!
//! ```bash
//! protosplit [-i SwiftUI.swift] [-o tempData.txt] [--mode truncate|append] [--report text|json]
//! ```
//!
//! By default the output file is truncated on every run. Earlier versions of
//! this tool always appended to `tempData.txt`, accumulating every run's
//! output with no delimiter; pass `--mode append` (or set `mode = "append"`)
//! to keep that behavior.
//!
//! ## Modules
//!
//! - `rewrite` - Pure name extraction and literal rewrite rules
//! - `document` - Reading the source document and persisting the result
//! - `config` - Layered settings (defaults, TOML file, environment, flags)
//! - `cli` - Argument parsing, logging setup and run orchestration
//! - `error` - Library error type
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod rewrite;

pub use error::{Error, Result};
pub use rewrite::{rewrite_protocols, rewrite_with_report};
