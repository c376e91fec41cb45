//! CLI argument structures

use crate::document::OutputMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Split protocol declarations into empty declarations plus extension blocks
#[derive(Parser, Debug)]
#[command(name = "protosplit")]
#[command(about = "protosplit - Split protocol declarations into declaration and extension blocks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file (defaults to ./protosplit.toml when present)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Source file to rewrite (default: SwiftUI.swift)
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Destination file (default: tempData.txt)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// How the destination file is written
    #[arg(long, value_enum)]
    pub mode: Option<OutputMode>,

    /// Write the rewritten text to stdout instead of the destination file
    #[arg(long)]
    pub stdout: bool,

    /// Print a summary of discovered names and rewritten declarations
    #[arg(long, value_enum, conflicts_with = "stdout")]
    pub report: Option<ReportFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
