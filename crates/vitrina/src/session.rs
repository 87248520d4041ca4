//! Scoped browser session lifecycle.
//!
//! Each scenario owns exactly one [`Session`] for its duration. The runner
//! opens it before the scenario body and closes it after the body has
//! produced an outcome, so an element-resolution error in the middle of a
//! scenario cannot leak a browser instance.

use crate::browser::{Browser, BrowserConfig, Page};
use crate::result::VitrinaResult;

/// One browser instance plus the single page a scenario drives
#[derive(Debug)]
pub struct Session {
    browser: Browser,
    page: Page,
}

impl Session {
    /// Launch a browser and open one page.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser cannot be launched or the page
    /// cannot be created.
    pub async fn open(config: BrowserConfig) -> VitrinaResult<Self> {
        let browser = Browser::launch(config).await?;
        match browser.new_page().await {
            Ok(page) => Ok(Self { browser, page }),
            Err(e) => {
                // Page creation failed after launch; do not leak the browser.
                if let Err(close_err) = browser.close().await {
                    tracing::warn!(error = %close_err, "browser did not close after failed page creation");
                }
                Err(e)
            }
        }
    }

    /// The page this session drives
    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// Mutable access to the page
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Release the browser. Consumes the session so it cannot be reused.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser refuses to shut down cleanly.
    pub async fn close(self) -> VitrinaResult<()> {
        self.browser.close().await
    }
}

#[cfg(all(test, not(feature = "browser")))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::browser::MockScript;

    #[tokio::test]
    async fn test_open_creates_one_browser() {
        let script = MockScript::new();
        let session = Session::open(BrowserConfig::default().with_script(script.clone()))
            .await
            .unwrap();
        assert_eq!(script.opened(), 1);
        assert_eq!(script.closed(), 0);
        drop(session);
    }

    #[tokio::test]
    async fn test_close_releases_the_browser() {
        let script = MockScript::new();
        let session = Session::open(BrowserConfig::default().with_script(script.clone()))
            .await
            .unwrap();
        session.close().await.unwrap();
        assert_eq!(script.opened(), 1);
        assert_eq!(script.closed(), 1);
    }

    #[tokio::test]
    async fn test_page_starts_blank() {
        let session = Session::open(BrowserConfig::default()).await.unwrap();
        assert_eq!(session.page().current_url(), "about:blank");
        session.close().await.unwrap();
    }
}
