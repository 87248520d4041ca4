//! Suite configuration.
//!
//! Settings are read once from a YAML properties file at startup and passed
//! by value into the scenario runner. Credentials can be overridden with
//! environment variables so they stay out of checked-in files.

use crate::result::{VitrinaError, VitrinaResult};
use crate::wait::WaitOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the storefront URL
pub const ENV_BASE_URL: &str = "VITRINA_BASE_URL";
/// Environment variable overriding the admin email
pub const ENV_ADMIN_EMAIL: &str = "VITRINA_ADMIN_EMAIL";
/// Environment variable overriding the admin password
pub const ENV_ADMIN_PASSWORD: &str = "VITRINA_ADMIN_PASSWORD";

/// Title wait settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaitSettings {
    /// Maximum time to wait for an expected title, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Polling interval while waiting, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    crate::wait::DEFAULT_WAIT_TIMEOUT_MS
}

const fn default_poll_interval_ms() -> u64 {
    crate::wait::DEFAULT_POLL_INTERVAL_MS
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl WaitSettings {
    /// Convert to wait options for the title wait
    #[must_use]
    pub const fn options(&self) -> WaitOptions {
        WaitOptions::new()
            .with_timeout(self.timeout_ms)
            .with_poll_interval(self.poll_interval_ms)
    }
}

/// Immutable suite settings, sourced once per process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// URL of the storefront admin login page
    pub base_url: String,
    /// Admin account email
    pub admin_email: String,
    /// Admin account password
    pub admin_password: String,
    /// Directory for failure screenshots (accumulates across runs)
    #[serde(default = "default_screenshot_dir")]
    pub screenshot_dir: PathBuf,
    /// Title wait settings
    #[serde(default)]
    pub wait: WaitSettings,
}

fn default_screenshot_dir() -> PathBuf {
    PathBuf::from("Screenshots")
}

impl Settings {
    /// Load settings from a YAML file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> VitrinaResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| VitrinaError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut settings: Self =
            serde_yaml_ng::from_str(&raw).map_err(|e| VitrinaError::Config {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Override URL and credentials from the environment when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Ok(email) = std::env::var(ENV_ADMIN_EMAIL) {
            self.admin_email = email;
        }
        if let Ok(password) = std::env::var(ENV_ADMIN_PASSWORD) {
            self.admin_password = password;
        }
    }

    /// Set the screenshot directory
    #[must_use]
    pub fn with_screenshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.screenshot_dir = dir.into();
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_yaml() -> &'static str {
        "base_url: https://admin-demo.nopcommerce.com/login\n\
         admin_email: admin@yourstore.com\n\
         admin_password: admin\n"
    }

    #[test]
    fn test_load_minimal_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_yaml().as_bytes()).unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.base_url, "https://admin-demo.nopcommerce.com/login");
        assert_eq!(settings.admin_email, "admin@yourstore.com");
        assert_eq!(settings.admin_password, "admin");
        assert_eq!(settings.screenshot_dir, PathBuf::from("Screenshots"));
    }

    #[test]
    fn test_wait_defaults() {
        let settings: Settings = serde_yaml_ng::from_str(sample_yaml()).unwrap();
        assert_eq!(settings.wait.timeout_ms, crate::wait::DEFAULT_WAIT_TIMEOUT_MS);
        assert_eq!(
            settings.wait.poll_interval_ms,
            crate::wait::DEFAULT_POLL_INTERVAL_MS
        );
    }

    #[test]
    fn test_explicit_wait_settings() {
        let yaml = format!("{}wait:\n  timeout_ms: 1000\n  poll_interval_ms: 10\n", sample_yaml());
        let settings: Settings = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(settings.wait.timeout_ms, 1000);
        assert_eq!(settings.wait.poll_interval_ms, 10);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/nonexistent/vitrina.yaml").unwrap_err();
        assert!(matches!(err, VitrinaError::Config { .. }));
    }

    #[test]
    fn test_with_screenshot_dir() {
        let settings: Settings = serde_yaml_ng::from_str(sample_yaml()).unwrap();
        let settings = settings.with_screenshot_dir("artifacts/shots");
        assert_eq!(settings.screenshot_dir, PathBuf::from("artifacts/shots"));
    }
}
