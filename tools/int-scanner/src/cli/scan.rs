//! Command line parsing and [`Action::Scan`][as] construction.
//!
//! [as]: crate::cli::Action::Scan

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, value_parser};
use int_scanner::Signedness;

use crate::cli::{base_arg, parse_base, parse_signedness, unsigned_arg};

/// Description of the buffer to scan and how to convert the literals within it.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ScanConfig {
    /// The base passed to each conversion.
    pub base: i32,
    /// Whether the literals are converted as signed or unsigned integers.
    pub signedness: Signedness,
    /// The file to scan. Standard input is scanned if `None`.
    pub path: Option<PathBuf>,
}

/// Parses the arguments required to produce a valid [`ScanConfig`].
pub fn parse_arguments(matches: &ArgMatches) -> ScanConfig {
    ScanConfig {
        base: parse_base(matches),
        signedness: parse_signedness(matches),
        path: matches.get_one::<PathBuf>("path").cloned(),
    }
}

/// Returns the command parser for an [`Action::Scan`][as].
///
/// [as]: crate::cli::Action::Scan
pub fn subcommand_parser() -> Command {
    let path = Arg::new("path")
        .help("File to scan; standard input if omitted")
        .value_parser(value_parser!(PathBuf));

    Command::new("scan")
        .about("Reports every integer literal within a file or standard input")
        .arg(base_arg())
        .arg(unsigned_arg())
        .arg(path)
}
