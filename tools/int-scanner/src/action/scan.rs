//! Scanning of a file or standard input for integer literals according to a [`ScanConfig`].

use std::io::{self, BufWriter, Read, Write};

use anyhow::{Context, Result};
use int_scanner::{Tokens, status};
use tracing::{debug, info, warn};

use crate::cli::scan::ScanConfig;

/// Scans the input selected by `config`, writing one line per literal to standard output.
///
/// Each line holds the literal's offset, length, value, and status, separated by tabs.
///
/// # Errors
///
/// Returns errors if the base is invalid, the input cannot be read, or writing to standard
/// output fails.
pub fn scan(config: ScanConfig) -> Result<()> {
    let input = match &config.path {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("error reading \"{}\"", path.display()))?,
        None => {
            let mut input = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut input)
                .context("error reading standard input")?;
            input
        }
    };
    info!(bytes = input.len(), base = config.base, "scanning");

    let tokens = Tokens::new(&input, config.base, config.signedness)?;
    let mut stdout = BufWriter::new(io::stdout().lock());
    let mut count = 0usize;

    for token in tokens {
        match token.error {
            Some(error) => warn!(%error, offset = token.offset, "literal clamped"),
            None => debug!(offset = token.offset, length = token.length, "found literal"),
        }

        writeln!(
            stdout,
            "{}\t{}\t{}\t{}",
            token.offset,
            token.length,
            token.value,
            status(token.error)
        )?;
        count += 1;
    }
    stdout.flush()?;

    info!(count, "scan complete");
    Ok(())
}
