//! Automation for analyzing, documenting, and testing `strntol` and associated tools.

use anyhow::Result;

use crate::{
    action::{clippy::clippy, doc::doc, test::test},
    cli::Action,
};

pub mod action;
pub mod cli;
pub mod common;

/// The packages that make up the workspace, excluding `xtask` itself.
pub const PACKAGES: &[&str] = &["strntol", "int-scanner"];

fn main() -> Result<()> {
    match cli::get_action() {
        Action::Clippy(config) => clippy(config)?,
        Action::Doc(config) => doc(config)?,
        Action::Test(config) => test(config)?,
    }

    Ok(())
}
