//! Interactive scaffolding flow using cliclack (Charm-style inline prompts)
//!
//! This module is only available when the `tui` feature is enabled.

pub mod confirm;
mod prompts;

pub use prompts::{resolve_target, run, usage, Outcome, Target, UsageError};
