//! Command line parsing and [`Action::Test`][at] construction.
//!
//! [at]: crate::cli::Action::Test

use clap::{Arg, ArgMatches, Command, builder::EnumValueParser, value_parser};

use crate::common::Profile;

/// Description of various parameters used for `cargo test`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct TestConfig {
    /// The [`Profile`] with which the tests should be built.
    pub profile: Profile,
    /// The number of cases each property test should generate, if overridden.
    pub proptest_cases: Option<u32>,
}

/// Parses the arguments required to produce a valid [`TestConfig`].
pub fn parse_arguments(matches: &ArgMatches) -> TestConfig {
    let profile = matches
        .get_one::<Profile>("profile")
        .copied()
        .unwrap_or_else(|| unreachable!("`profile` should have a default value"));

    TestConfig {
        profile,
        proptest_cases: matches.get_one::<u32>("proptest-cases").copied(),
    }
}

/// Returns the command parser for an [`Action::Test`][at].
///
/// [at]: crate::cli::Action::Test
pub fn subcommand_parser() -> Command {
    let profile = Arg::new("profile")
        .long("profile")
        .value_parser(EnumValueParser::<Profile>::new())
        .default_value("dev");

    let proptest_cases = Arg::new("proptest-cases")
        .long("proptest-cases")
        .env("PROPTEST_CASES")
        .help("Number of cases generated by each property test")
        .value_parser(value_parser!(u32));

    Command::new("test")
        .about("Run the tests of all packages, and of `strntol` without `std`")
        .arg(profile)
        .arg(proptest_cases)
}
