// Rust guideline compliant 2026-02-12

//! Implementation of the `husky add` command.
//!
//! Appends a command to a hook script, creating the script if needed.

use anyhow::Result;
use husky_core::HookManager;

/// Appends `cmd` to the hook script at `file`.
///
/// # Arguments
///
/// * `file` - Path of the hook file
/// * `cmd` - Shell command to append
///
/// # Returns
///
/// Ok if the hook was updated or created, Err otherwise.
///
/// # Errors
///
/// Returns an error if the hook directory does not exist or the file cannot
/// be written.
pub fn execute(file: String, cmd: String) -> Result<()> {
    let root = std::env::current_dir()?;
    let manager = HookManager::new(root);
    manager.add_hook(&file, &cmd)?;
    Ok(())
}
