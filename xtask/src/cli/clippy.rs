//! Command line parsing and [`Action::Clippy`][ac] construction.
//!
//! [ac]: crate::cli::Action::Clippy

use clap::{Arg, ArgAction, ArgMatches, Command};

/// Description of various parameters used for `cargo clippy`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct ClippyConfig {
    /// If `true`, warnings are treated as errors.
    pub deny_warnings: bool,
}

/// Parses the arguments required to produce a valid [`ClippyConfig`].
pub fn parse_arguments(matches: &ArgMatches) -> ClippyConfig {
    ClippyConfig {
        deny_warnings: matches.get_flag("deny-warnings"),
    }
}

/// Returns the command parser for an [`Action::Clippy`][ac].
///
/// [ac]: crate::cli::Action::Clippy
pub fn subcommand_parser() -> Command {
    let deny_warnings = Arg::new("deny-warnings")
        .long("deny-warnings")
        .help("Treat warnings as errors")
        .action(ArgAction::SetTrue);

    Command::new("clippy")
        .about("Run clippy on all packages, with and without `std`")
        .arg(deny_warnings)
}
