//! Helper function to document all packages given a [`DocConfig`].

use anyhow::Result;

use crate::{
    action::{cargo_cmd, run_cmd},
    cli::doc::DocConfig,
};

/// Runs `cargo doc` on all packages.
///
/// # Errors
///
/// Returns errors if the `cargo doc` command fails.
pub fn doc(config: DocConfig) -> Result<()> {
    let mut cmd = cargo_cmd("doc");
    cmd.arg("--no-deps");

    if config.open {
        cmd.arg("--open");
    }

    run_cmd(cmd)?;

    Ok(())
}
