//! Command line parsing and [`Action`] construction.

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use int_scanner::Signedness;

use crate::cli::{convert::ConvertConfig, scan::ScanConfig};

pub mod convert;
pub mod scan;

/// The action to carry out.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Action {
    /// Convert the literals given on the command line.
    Convert(ConvertConfig),
    /// Scan a file or standard input for integer literals.
    Scan(ScanConfig),
}

/// Parses `int-scanner`'s arguments to construct an [`Action`].
pub fn get_action() -> Action {
    let matches = command_parser().get_matches();

    let Some((subcommand_name, subcommand_matches)) = matches.subcommand() else {
        unreachable!("subcommand is required");
    };
    match subcommand_name {
        "convert" => Action::Convert(convert::parse_arguments(subcommand_matches)),
        "scan" => Action::Scan(scan::parse_arguments(subcommand_matches)),
        _ => unreachable!("unexpected subcommand: {subcommand_name:?}"),
    }
}

/// Returns the command parser for all [`Action`]s.
fn command_parser() -> Command {
    Command::new("int-scanner")
        .about("Converts and scans for integer literals within bounded byte sequences")
        .subcommand(convert::subcommand_parser())
        .subcommand(scan::subcommand_parser())
        .subcommand_required(true)
        .arg_required_else_help(true)
}

/// Returns the argument selecting the base passed to each conversion.
fn base_arg() -> Arg {
    Arg::new("base")
        .long("base")
        .env("INT_SCANNER_BASE")
        .help("Base of the literals, or 0 to detect it from each literal")
        .value_parser(value_parser!(i32))
        .allow_negative_numbers(true)
        .default_value("0")
}

/// Returns the argument selecting [`Signedness::Unsigned`].
fn unsigned_arg() -> Arg {
    Arg::new("unsigned")
        .long("unsigned")
        .help("Convert as an unsigned 64-bit integer")
        .action(ArgAction::SetTrue)
}

/// Extracts the base selected by [`base_arg`].
fn parse_base(matches: &ArgMatches) -> i32 {
    matches
        .get_one::<i32>("base")
        .copied()
        .unwrap_or_else(|| unreachable!("`base` should have a default value"))
}

/// Extracts the [`Signedness`] selected by [`unsigned_arg`].
fn parse_signedness(matches: &ArgMatches) -> Signedness {
    if matches.get_flag("unsigned") {
        Signedness::Unsigned
    } else {
        Signedness::Signed
    }
}

#[cfg(test)]
mod test {
    use int_scanner::Signedness;

    use super::{Action, command_parser, convert::parse_arguments as parse_convert};

    fn action(args: &[&str]) -> Action {
        let matches = command_parser().get_matches_from(args);
        let Some((name, matches)) = matches.subcommand() else {
            unreachable!("subcommand is required");
        };
        match name {
            "convert" => Action::Convert(parse_convert(matches)),
            "scan" => Action::Scan(super::scan::parse_arguments(matches)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn command_is_consistent() {
        command_parser().debug_assert();
    }

    #[test]
    fn convert_defaults() {
        let Action::Convert(config) = action(&["int-scanner", "convert", "-17", "0x1f"]) else {
            panic!("expected convert action");
        };

        assert_eq!(config.base, 0);
        assert_eq!(config.max_length, None);
        assert_eq!(config.signedness, Signedness::Signed);
        assert_eq!(config.literals, ["-17", "0x1f"]);
    }

    #[test]
    fn scan_options() {
        let Action::Scan(config) = action(&[
            "int-scanner",
            "scan",
            "--base",
            "16",
            "--unsigned",
            "input.txt",
        ]) else {
            panic!("expected scan action");
        };

        assert_eq!(config.base, 16);
        assert_eq!(config.signedness, Signedness::Unsigned);
        assert_eq!(config.path.as_deref(), Some(std::path::Path::new("input.txt")));
    }
}
