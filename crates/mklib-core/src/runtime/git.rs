//! git integration: configured identity and repository init

use super::command;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tokio::process::Command;

/// Namespace holding the user's identity in git config
const IDENTITY_PREFIX: &str = "user.";

/// git `user.*` configuration with the namespace stripped from each key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    entries: HashMap<String, String>,
}

impl Identity {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    pub fn email(&self) -> Option<&str> {
        self.get("email")
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse `git config --get-regexp` output (`key value...` per line)
pub fn parse_identity(output: &str) -> Identity {
    let entries = output
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let key = parts.next()?;
            let value = parts.collect::<Vec<_>>().join(" ");
            let key = key.strip_prefix(IDENTITY_PREFIX).unwrap_or(key);
            Some((key.to_string(), value))
        })
        .collect();

    Identity { entries }
}

/// Read the configured identity. No configuration yields an empty identity.
pub async fn lookup_identity() -> Result<Identity> {
    let output = Command::new("git")
        .args(["config", "--get-regexp", r"^user\."])
        .output()
        .await
        .context("Failed to run git (is git installed?)")?;

    // git exits with 1 when no key matches
    if !output.status.success() {
        return Ok(Identity::default());
    }

    Ok(parse_identity(&String::from_utf8_lossy(&output.stdout)))
}

/// Initialize a git repository in `dir`
pub async fn init_repository(dir: &Path) -> Result<()> {
    command::run_in("git", &["init"], dir).await
}
