//! Spawn the chosen program, detached from the launcher.

use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

use crate::catalog::LaunchSpec;
use crate::config::TerminalConfig;

/// Build the command line for `spec` without running it.
pub fn command_for(spec: &LaunchSpec, terminal: &TerminalConfig) -> Result<Command> {
    let command = spec.command.trim();
    if command.is_empty() {
        bail!("empty launch command");
    }
    let mut cmd = if spec.terminal {
        let mut cmd = Command::new(&terminal.program);
        cmd.arg(&terminal.exec_flag).arg(command);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    };
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        // Own process group, so the child outlives us and ignores our ^C.
        .process_group(0);
    Ok(cmd)
}

/// Start the program and return without waiting for it.
pub fn launch(spec: &LaunchSpec, terminal: &TerminalConfig) -> Result<()> {
    let mut cmd = command_for(spec, terminal)?;
    let child = cmd
        .spawn()
        .with_context(|| format!("failed to launch `{}`", spec.command))?;
    tracing::info!(command = %spec.command, terminal = spec.terminal, pid = child.id(), "launched");
    Ok(())
}
