// Rust guideline compliant 2026-02-12

//! External Git invocation.
//!
//! Git is treated as an opaque collaborator: it is spawned synchronously with
//! the calling process's standard streams and only its exit status is
//! inspected. Output is never captured or parsed.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Synchronous runner for the external `git` binary.
///
/// A launch failure (binary missing from the search path) is reported as
/// `Err`; a launched process that exits nonzero is reported through the
/// returned [`ExitStatus`]. Callers depend on that distinction.
pub trait GitRunner {
    /// Runs `git` with the given arguments in the given directory.
    ///
    /// # Arguments
    ///
    /// * `dir` - Working directory for the invocation
    /// * `args` - Arguments passed to `git`
    ///
    /// # Returns
    ///
    /// The exit status of the completed process.
    ///
    /// # Errors
    ///
    /// Returns an error if the process could not be launched at all.
    fn run(&self, dir: &Path, args: &[&str]) -> io::Result<ExitStatus>;
}

/// Default runner spawning the `git` binary found on the search path.
pub struct SystemGit;

impl GitRunner for SystemGit {
    fn run(&self, dir: &Path, args: &[&str]) -> io::Result<ExitStatus> {
        Command::new("git")
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
    }
}
