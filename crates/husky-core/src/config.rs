// Rust guideline compliant 2026-02-12

//! Environment-driven settings for husky.

/// Environment variable controlling whether husky is active.
pub const SKIP_ENV: &str = "HUSKY";

/// Process-environment settings read once per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Whether install should be skipped entirely (`HUSKY=0`).
    pub skip_install: bool,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// Supported environment variables:
    /// - `HUSKY` - set to `0` to skip hook installation
    ///
    /// # Returns
    ///
    /// A Settings value reflecting the current environment.
    pub fn from_env() -> Self {
        let skip_install = std::env::var(SKIP_ENV).map(|v| v == "0").unwrap_or(false);
        Self { skip_install }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_install_follows_env() {
        std::env::remove_var(SKIP_ENV);
        assert!(!Settings::from_env().skip_install);

        std::env::set_var(SKIP_ENV, "0");
        assert!(Settings::from_env().skip_install);

        // Any value other than "0" leaves husky active.
        std::env::set_var(SKIP_ENV, "1");
        assert!(!Settings::from_env().skip_install);

        std::env::remove_var(SKIP_ENV);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.skip_install);
    }
}
