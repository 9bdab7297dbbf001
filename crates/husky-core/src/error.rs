// Rust guideline compliant 2026-02-12

//! Error types for the husky core library.

use thiserror::Error;

/// Result type alias for husky operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Documentation link shown in errors that usually mean husky is being
/// pointed at the wrong directory.
pub const HELP_URL: &str = "https://typicode.github.io/husky/#/?id=custom-directory";

/// Error types for husky operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested hook directory resolves outside the project root.
    #[error(".. not allowed (see {})", HELP_URL)]
    DirEscape,

    /// No `.git` entry at the project root.
    #[error(".git can't be found (see {})", HELP_URL)]
    NotRepoRoot,

    /// Hook file targets a directory that has not been created yet.
    #[error("can't create hook, {0} directory doesn't exist (try running husky install)")]
    HooksDirMissing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_errors_reference_help_link() {
        assert!(Error::DirEscape.to_string().contains(HELP_URL));
        assert!(Error::NotRepoRoot.to_string().contains(HELP_URL));
    }

    #[test]
    fn test_missing_directory_error_names_the_directory() {
        let err = Error::HooksDirMissing("/repo/.husky".to_string());
        let message = err.to_string();
        assert!(message.contains("/repo/.husky"));
        assert!(message.contains("try running husky install"));
    }
}
