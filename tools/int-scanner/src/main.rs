//! Tool for converting integer literals and scanning buffers for them using the bounded
//! conversions provided by [`strntol`].

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::{
    action::{convert::convert, scan::scan},
    cli::Action,
};

pub mod action;
pub mod cli;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli::get_action() {
        Action::Convert(config) => convert(config),
        Action::Scan(config) => scan(config),
    }
}
