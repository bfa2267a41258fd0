//! Subprocess helpers for external tools (git, package managers)

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Render a command line for display
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run `program` in `dir` with inherited stdio.
/// Fails when the program cannot be started or exits unsuccessfully.
pub async fn run_in(program: &str, args: &[&str], dir: &Path) -> Result<()> {
    let cmd = display_command(program, args);
    println!("{} {}", "Running:".dimmed(), cmd.yellow());

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .with_context(|| format!("Failed to run `{}` (is {} installed?)", cmd, program))?;

    if !status.success() {
        anyhow::bail!(
            "`{}` failed with exit code: {}",
            cmd,
            status.code().unwrap_or(-1)
        );
    }

    Ok(())
}
