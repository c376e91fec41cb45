//! CLI handling
//!
//! This module contains:
//! - Argument parsing structures
//! - Logging setup
//! - Run orchestration (settings, read, rewrite, persist, report)

pub mod args;
pub mod help;
pub mod run;

pub use args::{Cli, ReportFormat};
pub use help::{get_log_level, init_tracing};
pub use run::execute;
