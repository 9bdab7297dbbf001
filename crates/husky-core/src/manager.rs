// Rust guideline compliant 2026-02-12

//! Hook installation and management.
//!
//! [`HookManager`] owns the four operations husky exposes: `install`, `set`,
//! `add`, and `uninstall`. It is an explicit value constructed at the
//! composition root; callers that want custom logging or a fake Git binary
//! inject their own collaborators.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::git::{GitRunner, SystemGit};
use crate::logger::{ConsoleLogger, Logger};
use crate::paths;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Hook directory used when the caller does not name one.
pub const DEFAULT_HOOK_DIR: &str = ".husky";

/// File name of the shared runner script inside `<dir>/_`.
pub const RUNNER_NAME: &str = "husky.sh";

/// The shared runner script, embedded at build time and written verbatim
/// on install.
pub const RUNNER_SCRIPT: &str = include_str!("../assets/husky.sh");

/// Manages Git hook scripts for one project root.
pub struct HookManager {
    root: PathBuf,
    logger: Box<dyn Logger>,
    git: Box<dyn GitRunner>,
}

impl HookManager {
    /// Creates a manager for the given project root with the default
    /// collaborators (console logger, system `git` binary).
    ///
    /// # Arguments
    ///
    /// * `root` - Absolute path of the project root
    ///
    /// # Returns
    ///
    /// A new HookManager instance.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            logger: Box::new(ConsoleLogger),
            git: Box::new(SystemGit),
        }
    }

    /// Replaces the logger collaborator.
    pub fn with_logger(mut self, logger: Box<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replaces the Git runner collaborator.
    pub fn with_git(mut self, git: Box<dyn GitRunner>) -> Self {
        self.git = git;
        self
    }

    /// Installs Git hooks into `dir`.
    ///
    /// Provisions `<dir>/_` with the shared runner script and points
    /// `core.hooksPath` at `dir`. Outside a Git repository (or when the
    /// `git` binary is unavailable) this is a silent no-op.
    ///
    /// # Arguments
    ///
    /// * `dir` - Hook directory, resolved against the project root
    ///
    /// # Returns
    ///
    /// Ok if hooks were installed or installation was skipped, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `dir` resolves outside the project root
    /// - The project root has no `.git` entry
    /// - Directory or file creation fails
    /// - The `git config` call cannot be launched
    pub fn install(&self, dir: &str) -> Result<()> {
        if Settings::from_env().skip_install {
            self.logger
                .log("HUSKY env variable is set to 0, skipping install");
            return Ok(());
        }

        // Not inside a repository, or git itself is unavailable: do nothing.
        match self.git.run(&self.root, &["rev-parse"]) {
            Ok(status) if status.success() => {}
            Ok(_) | Err(_) => return Ok(()),
        }

        let hooks_dir = paths::resolve(&self.root, dir);
        if !hooks_dir.starts_with(&self.root) {
            return Err(Error::DirEscape);
        }

        if !self.root.join(".git").exists() {
            return Err(Error::NotRepoRoot);
        }

        self.provision(dir, &hooks_dir).map_err(|e| {
            self.logger.error("Git hooks failed to install");
            e
        })?;

        self.logger.log("Git hooks installed");
        Ok(())
    }

    fn provision(&self, dir: &str, hooks_dir: &Path) -> Result<()> {
        let runner_dir = hooks_dir.join("_");
        fs::create_dir_all(&runner_dir)?;
        // Keep the runner directory out of version control.
        fs::write(runner_dir.join(".gitignore"), "*")?;
        fs::write(runner_dir.join(RUNNER_NAME), RUNNER_SCRIPT)?;
        self.git.run(&self.root, &["config", "core.hooksPath", dir])?;
        Ok(())
    }

    /// Creates or overwrites the hook script at `path`.
    ///
    /// The script sources the shared runner and then runs `command`.
    ///
    /// # Arguments
    ///
    /// * `path` - Hook file path, resolved against the project root
    /// * `command` - Shell command the hook runs
    ///
    /// # Returns
    ///
    /// Ok if the hook was written, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory of `path` does not exist
    /// - The file cannot be written or made executable
    pub fn set_hook(&self, path: &str, command: &str) -> Result<()> {
        let hook_path = paths::resolve(&self.root, path);
        if let Some(parent) = hook_path.parent() {
            if !parent.is_dir() {
                return Err(Error::HooksDirMissing(parent.display().to_string()));
            }
        }

        let script = format!(
            "#!/usr/bin/env sh\n. \"$(dirname -- \"$0\")/_/{}\"\n\n{}\n",
            RUNNER_NAME, command
        );
        fs::write(&hook_path, script)?;
        set_executable(&hook_path)?;

        self.logger.log(&format!("created {}", path));
        Ok(())
    }

    /// Appends `command` to the hook script at `path`, creating the script
    /// if it does not exist yet.
    ///
    /// # Arguments
    ///
    /// * `path` - Hook file path, resolved against the project root
    /// * `command` - Shell command to append
    ///
    /// # Returns
    ///
    /// Ok if the hook was updated or created, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written, or with the same
    /// conditions as [`HookManager::set_hook`] when the file is missing.
    pub fn add_hook(&self, path: &str, command: &str) -> Result<()> {
        let hook_path = paths::resolve(&self.root, path);
        if !hook_path.exists() {
            return self.set_hook(path, command);
        }

        let mut file = fs::OpenOptions::new().append(true).open(&hook_path)?;
        writeln!(file, "{}", command)?;

        self.logger.log(&format!("updated {}", path));
        Ok(())
    }

    /// Clears the `core.hooksPath` configuration.
    ///
    /// The exit status of the `git config --unset` call is deliberately
    /// ignored: the key may already be absent.
    ///
    /// # Returns
    ///
    /// Ok unless the `git` binary could not be launched.
    ///
    /// # Errors
    ///
    /// Returns an error if the process could not be launched.
    pub fn uninstall(&self) -> Result<()> {
        self.git
            .run(&self.root, &["config", "--unset", "core.hooksPath"])?;
        Ok(())
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}
