// Rust guideline compliant 2026-02-12

//! Husky CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
