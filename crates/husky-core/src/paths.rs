// Rust guideline compliant 2026-02-12

//! Path resolution helpers.

use std::path::{Component, Path, PathBuf};

/// Lexically resolves `target` against `root`.
///
/// `.` and `..` components are folded without consulting the filesystem, so
/// the result can be checked against `root` before anything is created.
/// An absolute `target` replaces `root` entirely.
///
/// # Arguments
///
/// * `root` - Absolute project root
/// * `target` - Caller-supplied path, usually relative
///
/// # Returns
///
/// The resolved absolute path with no dot components.
pub(crate) fn resolve(root: &Path, target: &str) -> PathBuf {
    let joined = if Path::new(target).is_absolute() {
        PathBuf::from(target)
    } else {
        root.join(target)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}
