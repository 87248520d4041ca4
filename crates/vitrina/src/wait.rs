//! Bounded wait mechanisms.
//!
//! Title assertions are preceded by an explicit wait-for-condition: the
//! title is polled until it reaches the expected value or the timeout
//! elapses. Reading immediately after navigation races the page load and
//! produces false failures.

use crate::browser::Page;
use crate::result::VitrinaResult;
use std::time::{Duration, Instant};

/// Default timeout for wait operations (30 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 30_000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Options for wait operations
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitOptions {
    /// Create wait options with defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Get timeout as Duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get poll interval as Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Poll the page title until it equals `expected` or the timeout elapses.
///
/// Returns the last observed title either way; the caller performs the
/// exact, case-sensitive comparison. A title that never converges is not
/// an error here, it is an assertion mismatch for the scenario to report.
///
/// # Errors
///
/// Returns an error only if reading the title fails at the driver level.
pub async fn wait_for_title(
    page: &Page,
    expected: &str,
    options: WaitOptions,
) -> VitrinaResult<String> {
    let deadline = Instant::now() + options.timeout();
    loop {
        let title = page.title().await?;
        if title == expected || Instant::now() >= deadline {
            return Ok(title);
        }
        tokio::time::sleep(options.poll_interval()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = WaitOptions::new();
        assert_eq!(options.timeout_ms, DEFAULT_WAIT_TIMEOUT_MS);
        assert_eq!(options.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    }

    #[test]
    fn test_builder() {
        let options = WaitOptions::new().with_timeout(1000).with_poll_interval(10);
        assert_eq!(options.timeout(), Duration::from_millis(1000));
        assert_eq!(options.poll_interval(), Duration::from_millis(10));
    }

    #[cfg(not(feature = "browser"))]
    mod title_wait_tests {
        use super::*;
        use crate::browser::{Browser, BrowserConfig, MockScript};

        fn quick() -> WaitOptions {
            WaitOptions::new().with_timeout(100).with_poll_interval(10)
        }

        #[tokio::test]
        #[allow(clippy::unwrap_used)]
        async fn test_matching_title_returns_immediately() {
            let config = BrowserConfig::default()
                .with_script(MockScript::new().with_title_after_goto("Dashboard"));
            let browser = Browser::launch(config).await.unwrap();
            let mut page = browser.new_page().await.unwrap();
            page.goto("https://example.test").await.unwrap();

            let observed = wait_for_title(&page, "Dashboard", quick()).await.unwrap();
            assert_eq!(observed, "Dashboard");
        }

        #[tokio::test]
        #[allow(clippy::unwrap_used)]
        async fn test_mismatch_returns_last_observed_after_timeout() {
            let config = BrowserConfig::default()
                .with_script(MockScript::new().with_title_after_goto("Wrong title"));
            let browser = Browser::launch(config).await.unwrap();
            let mut page = browser.new_page().await.unwrap();
            page.goto("https://example.test").await.unwrap();

            let observed = wait_for_title(&page, "Dashboard", quick()).await.unwrap();
            assert_eq!(observed, "Wrong title");
        }
    }
}
