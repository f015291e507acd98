//! Conversion of the literals given on the command line according to a [`ConvertConfig`].

use std::io::{self, Write};

use anyhow::Result;
use int_scanner::status;
use strntol::ConvertError;
use tracing::{debug, warn};

use crate::cli::convert::ConvertConfig;

/// Converts every literal in `config`, writing one line per literal to standard output.
///
/// # Errors
///
/// Returns errors if writing to standard output fails.
pub fn convert(config: ConvertConfig) -> Result<()> {
    let mut stdout = io::stdout().lock();

    for literal in &config.literals {
        let max_length = config.max_length.unwrap_or(literal.len());
        let conversion = int_scanner::convert(
            literal.as_bytes(),
            max_length,
            config.base,
            config.signedness,
        );

        match conversion.error {
            Some(error @ ConvertError::InvalidBase(_)) => warn!(%error, "conversion rejected"),
            Some(error) => warn!(%error, literal = literal.as_str(), "literal clamped"),
            None => debug!(
                literal = literal.as_str(),
                consumed = conversion.consumed,
                "converted"
            ),
        }

        writeln!(
            stdout,
            "{literal:?}\t{}\t{}\t{}",
            conversion.value,
            conversion.consumed,
            status(conversion.error)
        )?;
    }

    Ok(())
}
