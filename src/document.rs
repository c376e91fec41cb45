//! Reading source documents and persisting rewritten text
//!
//! The rewrite itself never touches the file system; these helpers are the
//! only I/O in the crate.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// How an output file is opened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Replace any previous content
    #[default]
    Truncate,
    /// Add after previous content, with no delimiter
    Append,
}

impl FromStr for OutputMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "truncate" => Ok(Self::Truncate),
            "append" => Ok(Self::Append),
            other => Err(Error::config(format!(
                "invalid output mode '{other}' (expected 'truncate' or 'append')"
            ))),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncate => write!(f, "truncate"),
            Self::Append => write!(f, "append"),
        }
    }
}

/// Where rewritten text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    File { path: PathBuf, mode: OutputMode },
    Stdout,
}

/// Read a whole document into memory
pub fn read_document(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| Error::missing_input(path, e))?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Write `text` to a file using the given mode
pub fn write_document(path: &Path, text: &str, mode: OutputMode) -> Result<()> {
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        OutputMode::Truncate => options.write(true).truncate(true),
        OutputMode::Append => options.append(true),
    };

    let mut file = options
        .open(path)
        .map_err(|e| Error::output_write(path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| Error::output_write(path, e))?;

    debug!(
        "Wrote {} bytes to {} ({mode})",
        text.len(),
        path.display()
    );
    Ok(())
}

/// Send `text` to a destination
pub fn persist(destination: &Destination, text: &str) -> Result<()> {
    match destination {
        Destination::File { path, mode } => write_document(path, text, *mode),
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| Error::output_write("<stdout>", e))
        }
    }
}
