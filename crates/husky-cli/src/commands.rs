// Rust guideline compliant 2026-02-12

//! Command implementations for the husky CLI.

pub mod add;
pub mod install;
pub mod set;
pub mod uninstall;
