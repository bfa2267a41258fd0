//! External tools used while scaffolding
//!
//! This module provides:
//! - Package manager selection and dependency installation
//! - git identity lookup and repository initialization
//! - A shared subprocess runner

pub mod command;
pub mod git;
pub mod package_manager;

pub use git::{init_repository, lookup_identity, parse_identity, Identity};
pub use package_manager::{PackageManager, DEV_DEPENDENCIES};
