//! Command line parsing and [`Action::Convert`][ac] construction.
//!
//! [ac]: crate::cli::Action::Convert

use clap::{Arg, ArgMatches, Command, value_parser};
use int_scanner::Signedness;

use crate::cli::{base_arg, parse_base, parse_signedness, unsigned_arg};

/// Description of the literals to convert and how to convert them.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ConvertConfig {
    /// The base passed to each conversion.
    pub base: i32,
    /// The maximum number of bytes of each literal to inspect. Defaults to each literal's length.
    pub max_length: Option<usize>,
    /// Whether the literals are converted as signed or unsigned integers.
    pub signedness: Signedness,
    /// The literals to convert.
    pub literals: Vec<String>,
}

/// Parses the arguments required to produce a valid [`ConvertConfig`].
pub fn parse_arguments(matches: &ArgMatches) -> ConvertConfig {
    let literals = matches
        .get_many::<String>("literal")
        .unwrap_or_else(|| unreachable!("`literal` is a required argument"))
        .cloned()
        .collect();

    ConvertConfig {
        base: parse_base(matches),
        max_length: matches.get_one::<usize>("max-length").copied(),
        signedness: parse_signedness(matches),
        literals,
    }
}

/// Returns the command parser for an [`Action::Convert`][ac].
///
/// [ac]: crate::cli::Action::Convert
pub fn subcommand_parser() -> Command {
    let max_length = Arg::new("max-length")
        .long("max-length")
        .env("INT_SCANNER_MAX_LENGTH")
        .help("Maximum number of bytes of each literal to inspect")
        .value_parser(value_parser!(usize));

    let literal = Arg::new("literal")
        .help("Literals to convert")
        .num_args(1..)
        .allow_hyphen_values(true)
        .required(true);

    Command::new("convert")
        .about("Converts each literal, reporting its value, consumed length, and status")
        .arg(base_arg())
        .arg(max_length)
        .arg(unsigned_arg())
        .arg(literal)
}
