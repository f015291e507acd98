//! Command line parsing and [`Action::Doc`][ac] construction.
//!
//! [ac]: crate::cli::Action::Doc

use clap::{Arg, ArgAction, ArgMatches, Command};

/// Description of various parameters used for `cargo doc`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DocConfig {
    /// If `true`, the generated documentation is opened in a browser.
    pub open: bool,
}

/// Parses the arguments required to produce a valid [`DocConfig`].
pub fn parse_arguments(matches: &ArgMatches) -> DocConfig {
    DocConfig {
        open: matches.get_flag("open"),
    }
}

/// Returns the command parser for an [`Action::Doc`][ac].
///
/// [ac]: crate::cli::Action::Doc
pub fn subcommand_parser() -> Command {
    let open = Arg::new("open")
        .long("open")
        .help("Open the documentation once generated")
        .action(ArgAction::SetTrue);

    Command::new("doc").about("Run doc on all packages").arg(open)
}
