// Rust guideline compliant 2026-02-12

//! Husky Core Library
//!
//! This crate provides the components of the husky Git hooks manager:
//! - Hook manager (install, set, add, uninstall)
//! - Logger and Git runner collaborator traits
//! - Environment settings
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod git;
pub mod logger;
pub mod manager;
mod paths;

pub use config::Settings;
pub use error::{Error, Result, HELP_URL};
pub use git::{GitRunner, SystemGit};
pub use logger::{ConsoleLogger, Logger, LOG_PREFIX};
pub use manager::{HookManager, DEFAULT_HOOK_DIR, RUNNER_NAME, RUNNER_SCRIPT};
