//! The generated file set and writing it to disk

use super::format::{dedent, to_tab_json};
use super::manifest::{Author, PackageManifest};
use super::{configs, license, ProjectOptions};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;
use tokio::task::JoinSet;

pub const MANIFEST_FILE: &str = "package.json";
pub const TSUP_CONFIG_FILE: &str = "tsup.config.ts";
pub const PRETTIER_CONFIG_FILE: &str = ".prettierrc";
pub const TSCONFIG_FILE: &str = "tsconfig.json";
pub const LICENSE_FILE: &str = "LICENSE";
pub const ENTRY_FILE: &str = "src/index.ts";
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Patterns ignored by git in every new project
const IGNORED: &[&str] = &[
    "node_modules",
    "dist",
    "bun.lockb",
    "*.log",
    ".DS_Store",
    "Thumbs.db",
    ".idea",
    ".vscode",
];

/// Relative path to file content, for every file of a new project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    files: BTreeMap<String, String>,
}

impl GeneratedFiles {
    /// Build the full file set for a project
    pub fn for_project(options: &ProjectOptions) -> Result<Self> {
        let author = Author::from_identity(&options.identity);
        let holder = author.as_ref().and_then(|a| a.name.clone());
        let manifest = PackageManifest::new(&options.name, options.manager, author);

        let mut generated = Self::default();
        generated.insert(MANIFEST_FILE, to_tab_json(&manifest)?);
        generated.insert(TSUP_CONFIG_FILE, configs::tsup_config_source()?);
        generated.insert(PRETTIER_CONFIG_FILE, to_tab_json(&configs::prettier())?);
        generated.insert(TSCONFIG_FILE, to_tab_json(&configs::tsconfig())?);
        generated.insert(LICENSE_FILE, license::mit(holder.as_deref(), options.year));
        generated.insert(ENTRY_FILE, entry_source());
        generated.insert(GITIGNORE_FILE, IGNORED.join("\n"));

        Ok(generated)
    }

    /// Add a file; content is stored with exactly one trailing newline
    pub fn insert(&mut self, path: &str, content: String) {
        let mut content = content.trim_end().to_string();
        content.push('\n');
        self.files.insert(path.to_string(), content);
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Write every file below `target_dir` concurrently.
    ///
    /// The first failure is returned as soon as it happens; files that
    /// were already written stay on disk.
    pub async fn write_all(&self, target_dir: &Path) -> Result<Vec<String>> {
        fs::create_dir_all(target_dir)
            .await
            .context("Failed to create target directory")?;

        // Parent directories first so the writes are independent
        for path in self.files.keys() {
            if let Some(parent) = target_dir.join(path).parent() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let mut writes = JoinSet::new();
        for (path, content) in &self.files {
            let target_path = target_dir.join(path);
            let content = content.clone();
            writes.spawn(async move {
                fs::write(&target_path, content)
                    .await
                    .with_context(|| format!("Failed to write file: {}", target_path.display()))
            });
        }

        while let Some(result) = writes.join_next().await {
            result.context("File write task panicked")??;
        }

        Ok(self.files.keys().cloned().collect())
    }
}

/// Entry point with a single example export
fn entry_source() -> String {
    let tab = '\t';
    dedent(&format!(
        "
        export function greet(name: string): string {{
        {tab}return `Hello, ${{name}}!`
        }}
        "
    ))
}
