//! Supported package managers and their command syntax

use super::command;
use anyhow::Result;
use clap::ValueEnum;
use std::fmt;
use std::path::Path;

/// Development dependencies installed into every new project
pub const DEV_DEPENDENCIES: &[&str] = &["tsup", "typescript", "@types/node"];

/// Package manager driving install, build and release commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum PackageManager {
    #[default]
    Bun,
    Pnpm,
    Npm,
    Yarn,
}

impl PackageManager {
    /// Executable name
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Bun => "bun",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// `build` script for package.json. npm cannot run package binaries
    /// directly, so it goes through npx.
    pub fn build_script(&self) -> String {
        match self {
            PackageManager::Npm => "npx tsup".to_string(),
            other => format!("{} tsup", other.command()),
        }
    }

    /// `release` script for package.json
    pub fn release_script(&self) -> String {
        format!("{0} run build && {0} publish", self.command())
    }

    /// Arguments adding `deps` as development dependencies
    pub fn install_args<'a>(&self, deps: &[&'a str]) -> Vec<&'a str> {
        let mut args = match self {
            PackageManager::Bun => vec!["add", "-d"],
            PackageManager::Pnpm | PackageManager::Yarn => vec!["add", "-D"],
            PackageManager::Npm => vec!["install", "-D"],
        };
        args.extend_from_slice(deps);
        args
    }

    /// Install [`DEV_DEPENDENCIES`] into the project at `dir`
    pub async fn install_dev_dependencies(&self, dir: &Path) -> Result<()> {
        command::run_in(self.command(), &self.install_args(DEV_DEPENDENCIES), dir).await
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}
