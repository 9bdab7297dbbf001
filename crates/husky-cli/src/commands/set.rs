// Rust guideline compliant 2026-02-12

//! Implementation of the `husky set` command.
//!
//! Creates or overwrites a hook script.

use anyhow::Result;
use husky_core::HookManager;

/// Writes the hook script at `file` running `cmd`.
///
/// # Arguments
///
/// * `file` - Path of the hook file
/// * `cmd` - Shell command the hook runs
///
/// # Returns
///
/// Ok if the hook was written, Err otherwise.
///
/// # Errors
///
/// Returns an error if the hook directory does not exist or the file cannot
/// be written.
pub fn execute(file: String, cmd: String) -> Result<()> {
    let root = std::env::current_dir()?;
    let manager = HookManager::new(root);
    manager.set_hook(&file, &cmd)?;
    Ok(())
}
