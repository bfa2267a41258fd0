//! mklib core - library behind the `mklib` TypeScript library scaffolder
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Argument parsing, text helpers, generated file
//!   contents, git and package manager invocations
//! - **Layer 2: CLI/TUI Interface** - cliclack-based flow that ties the steps
//!   together (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the interactive scaffolding flow
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use mklib_core::{runtime, templates::{GeneratedFiles, ProjectOptions}};
//!
//! let identity = runtime::lookup_identity().await?;
//! let options = ProjectOptions::new("my-lib", runtime::PackageManager::Pnpm, identity);
//! GeneratedFiles::for_project(&options)?.write_all(Path::new("my-lib")).await?;
//! ```

pub mod args;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use args::{parse_args, FlagError, FlagValue, Flags};
pub use runtime::{Identity, PackageManager};
pub use templates::{dedent, to_tab_json, GeneratedFiles, ProjectOptions};

#[cfg(feature = "tui")]
pub use tui::{run, Outcome};
