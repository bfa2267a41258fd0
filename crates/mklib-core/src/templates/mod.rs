//! Generated project contents
//!
//! This module provides:
//! - package.json types
//! - Tool configuration (tsup, prettier, tsconfig)
//! - MIT license text
//! - The generated file set and concurrent writing
//! - Text helpers (dedent, tab-indented JSON)

pub mod configs;
pub mod files;
pub mod format;
pub mod license;
pub mod manifest;

use crate::runtime::{Identity, PackageManager};

pub use files::GeneratedFiles;
pub use format::{dedent, to_tab_json};
pub use manifest::{Author, PackageManifest};

/// Inputs for generating a project
#[derive(Debug, Clone)]
pub struct ProjectOptions {
    /// Package name (also the directory name)
    pub name: String,
    pub manager: PackageManager,
    pub identity: Identity,
    /// Copyright year
    pub year: i32,
}

impl ProjectOptions {
    /// Options dated with the current year
    pub fn new(name: impl Into<String>, manager: PackageManager, identity: Identity) -> Self {
        Self {
            name: name.into(),
            manager,
            identity,
            year: license::current_year(),
        }
    }
}
