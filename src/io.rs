//! Reading input text and writing results for the command line.
//!
//! A path of `-` (or no path) means standard input / standard output.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Returns true if `path` is absent or stands for a standard stream.
fn is_std_stream(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p.as_os_str() == "-")
}

/// Reads the whole input, from a file or from stdin.
///
/// An empty file is not an error here; it simply yields an empty string.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let content = match path {
        Some(p) if !is_std_stream(path) => {
            let content = fs::read_to_string(p)
                .with_context(|| format!("Failed to read input file {}", p.display()))?;
            debug!("Read {} bytes from {}", content.len(), p.display());
            content
        }
        _ => {
            let mut content = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut content)
                .context("Failed to read from stdin")?;
            debug!("Read {} bytes from stdin", content.len());
            content
        }
    };
    Ok(content)
}

/// Writes `text` to a file (created or truncated) or to stdout.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(p) if !is_std_stream(path) => {
            fs::write(p, text)
                .with_context(|| format!("Failed to write output file {}", p.display()))?;
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(text.as_bytes())
                .and_then(|_| handle.flush())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
