//! Locator abstraction for element selection.
//!
//! Locators keep selector details out of scenario code: a page object owns
//! its locators, the session resolves them against the live DOM.

use std::time::Duration;

/// Default timeout for element resolution (5 seconds)
pub const DEFAULT_ELEMENT_TIMEOUT_MS: u64 = 5000;

/// Selector type for locating elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// CSS selector (e.g. `button.login-button`)
    Css(String),
    /// Test ID selector (`data-testid` attribute)
    TestId(String),
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create a test ID selector
    #[must_use]
    pub fn test_id(id: impl Into<String>) -> Self {
        Self::TestId(id.into())
    }

    /// Render as a CSS selector string for the driver
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Css(s) => s.clone(),
            Self::TestId(id) => format!("[data-testid=\"{id}\"]"),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

/// A locator for finding and interacting with one element
#[derive(Debug, Clone)]
pub struct Locator {
    selector: Selector,
    timeout: Duration,
}

impl Locator {
    /// Create a locator from a selector with the default timeout
    #[must_use]
    pub const fn new(selector: Selector) -> Self {
        Self {
            selector,
            timeout: Duration::from_millis(DEFAULT_ELEMENT_TIMEOUT_MS),
        }
    }

    /// Create a locator with a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::new(Selector::css(selector))
    }

    /// Set the resolution timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the underlying selector
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Get the resolution timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_selector_to_css() {
        let sel = Selector::css("input#Email");
        assert_eq!(sel.to_css(), "input#Email");
    }

    #[test]
    fn test_test_id_selector_to_css() {
        let sel = Selector::test_id("login-submit");
        assert_eq!(sel.to_css(), "[data-testid=\"login-submit\"]");
    }

    #[test]
    fn test_locator_defaults() {
        let locator = Locator::css("button[type='submit']");
        assert_eq!(locator.timeout(), Duration::from_millis(DEFAULT_ELEMENT_TIMEOUT_MS));
        assert_eq!(locator.selector().to_css(), "button[type='submit']");
    }

    #[test]
    fn test_locator_with_timeout() {
        let locator = Locator::css("input").with_timeout(Duration::from_millis(250));
        assert_eq!(locator.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(Selector::css("#Password").to_string(), "#Password");
    }
}
