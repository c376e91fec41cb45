//! Orchestration of a single rewrite run
//!
//! Resolves settings, reads the document, rewrites it, then persists the
//! result and optionally prints a report.

use crate::cli::args::{Cli, ReportFormat};
use crate::config::{Overrides, Settings};
use crate::document::{self, Destination};
use crate::rewrite::{self, RewriteReport};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Execute the command described by the parsed arguments
pub fn execute(cli: Cli) -> Result<RewriteReport> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    execute_in(cli, &cwd)
}

/// Execute with config discovery rooted at `dir`
pub fn execute_in(cli: Cli, dir: &Path) -> Result<RewriteReport> {
    let overrides = Overrides {
        input: cli.input,
        output: cli.output,
        mode: cli.mode,
    };
    let settings = Settings::resolve(cli.config.as_deref(), dir, overrides)
        .context("Failed to resolve configuration")?;

    let destination = if cli.stdout {
        Destination::Stdout
    } else {
        Destination::File {
            path: settings.output.clone(),
            mode: settings.mode,
        }
    };

    let report = run(&settings.input, &destination)?;

    if let Some(format) = cli.report {
        print_report(&report, format)?;
    }

    Ok(report)
}

/// Read `input`, rewrite it and persist the result
pub fn run(input: &Path, destination: &Destination) -> Result<RewriteReport> {
    let source = document::read_document(input)?;
    let rewrite = rewrite::rewrite_with_report(&source);

    for name in rewrite.report.unmatched_names() {
        warn!("Protocol '{}' has no ' {{' declaration to rewrite", name);
    }

    document::persist(destination, &rewrite.text)?;

    info!(
        "Rewrote {} declaration(s) across {} protocol name(s) from {}",
        rewrite.report.total_replacements(),
        rewrite.report.rule_applications(),
        input.display()
    );
    Ok(rewrite.report)
}

fn print_report(report: &RewriteReport, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => print!("{report}"),
        ReportFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
