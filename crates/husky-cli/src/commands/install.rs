// Rust guideline compliant 2026-02-12

//! Implementation of the `husky install` command.
//!
//! Provisions the hook directory and points `core.hooksPath` at it.

use anyhow::Result;
use husky_core::{HookManager, DEFAULT_HOOK_DIR};

/// Installs Git hooks into the given directory.
///
/// # Arguments
///
/// * `dir` - Hook directory, defaulting to `.husky`
///
/// # Returns
///
/// Ok if hooks were installed or installation was skipped, Err otherwise.
///
/// # Errors
///
/// Returns an error if the directory escapes the project root, the current
/// directory is not the repository top level, or provisioning fails.
pub fn execute(dir: Option<String>) -> Result<()> {
    let root = std::env::current_dir()?;
    let manager = HookManager::new(root);
    let dir = dir.unwrap_or_else(|| DEFAULT_HOOK_DIR.to_string());
    manager.install(&dir)?;
    Ok(())
}
