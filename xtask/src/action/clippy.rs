//! Helper function to run `cargo clippy` on all packages given a [`ClippyConfig`].

use anyhow::Result;

use crate::{
    action::{cargo_cmd, run_cmd},
    cli::clippy::ClippyConfig,
};

/// Runs `cargo clippy` on all packages, then on `strntol` without its default features.
///
/// # Errors
///
/// Returns errors when a `cargo clippy` command fails.
pub fn clippy(config: ClippyConfig) -> Result<()> {
    let mut cmd = cargo_cmd("clippy");
    cmd.args(["--all-targets", "--no-deps"]);
    deny_warnings(&mut cmd, config);

    run_cmd(cmd)?;

    let mut cmd = std::process::Command::new("cargo");
    cmd.arg("clippy");

    cmd.args(["--package", "strntol"]);
    cmd.args(["--no-default-features", "--no-deps"]);
    deny_warnings(&mut cmd, config);

    run_cmd(cmd)?;

    Ok(())
}

/// Appends the arguments that turn warnings into errors if requested by `config`.
fn deny_warnings(cmd: &mut std::process::Command, config: ClippyConfig) {
    if config.deny_warnings {
        cmd.args(["--", "-D", "warnings"]);
    }
}
