// Rust guideline compliant 2026-02-12

//! Implementation of the `husky uninstall` command.
//!
//! Clears the `core.hooksPath` configuration.

use anyhow::Result;
use husky_core::HookManager;

/// Removes the hooks-path configuration.
///
/// # Returns
///
/// Ok unless the `git` binary could not be launched.
///
/// # Errors
///
/// Returns an error if the `git` process could not be launched.
pub fn execute() -> Result<()> {
    let root = std::env::current_dir()?;
    let manager = HookManager::new(root);
    manager.uninstall()?;
    Ok(())
}
