//! Browser control for the storefront suite.
//!
//! With the `browser` feature enabled this drives a real Chromium instance
//! over CDP (Chrome `DevTools` Protocol) via chromiumoxide. Without the
//! feature it provides a scripted in-process fake, so the scenario runner
//! and failure capture can be unit tested without a browser.

use crate::locator::Locator;
use crate::result::{VitrinaError, VitrinaResult};

/// Browser configuration
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Path to chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
    /// Sandbox mode (disable for containers)
    pub sandbox: bool,
    /// Scripted page behavior for the in-process fake driver
    #[cfg(not(feature = "browser"))]
    pub script: MockScript,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1280,
            viewport_height: 800,
            chromium_path: None,
            sandbox: true,
            #[cfg(not(feature = "browser"))]
            script: MockScript::default(),
        }
    }
}

impl BrowserConfig {
    /// Set viewport dimensions
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set chromium path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Disable sandbox (for containers/CI)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }

    /// Attach a scripted page behavior (fake driver only)
    #[cfg(not(feature = "browser"))]
    #[must_use]
    pub fn with_script(mut self, script: MockScript) -> Self {
        self.script = script;
        self
    }
}

// ============================================================================
// Real CDP implementation (when the `browser` feature is enabled)
// ============================================================================

#[cfg(feature = "browser")]
mod cdp {
    use super::{BrowserConfig, Locator, VitrinaError, VitrinaResult};
    use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
    use chromiumoxide::cdp::browser_protocol::page::{
        CaptureScreenshotFormat, CaptureScreenshotParams,
    };
    use chromiumoxide::element::Element;
    use chromiumoxide::page::Page as CdpPage;
    use futures::StreamExt;
    use std::time::{Duration, Instant};

    const ELEMENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

    /// Browser instance with a live CDP connection
    #[derive(Debug)]
    pub struct Browser {
        config: BrowserConfig,
        inner: CdpBrowser,
        #[allow(dead_code)]
        handle: tokio::task::JoinHandle<()>,
    }

    impl Browser {
        /// Launch a new browser instance
        ///
        /// # Errors
        ///
        /// Returns an error if the browser cannot be launched
        pub async fn launch(config: BrowserConfig) -> VitrinaResult<Self> {
            let mut builder = CdpConfig::builder()
                .window_size(config.viewport_width, config.viewport_height);

            if !config.headless {
                builder = builder.with_head();
            }

            if !config.sandbox {
                builder = builder.no_sandbox();
            }

            if let Some(ref path) = config.chromium_path {
                builder = builder.chrome_executable(path);
            }

            let cdp_config = builder.build().map_err(|e| VitrinaError::BrowserLaunch {
                message: e.to_string(),
            })?;

            let (browser, mut handler) =
                CdpBrowser::launch(cdp_config)
                    .await
                    .map_err(|e| VitrinaError::BrowserLaunch {
                        message: e.to_string(),
                    })?;

            // Drive CDP events until the browser goes away
            let handle = tokio::spawn(async move {
                while let Some(h) = handler.next().await {
                    if h.is_err() {
                        break;
                    }
                }
            });

            Ok(Self {
                config,
                inner: browser,
                handle,
            })
        }

        /// Create a new page
        ///
        /// # Errors
        ///
        /// Returns an error if the page cannot be created
        pub async fn new_page(&self) -> VitrinaResult<Page> {
            let cdp_page =
                self.inner
                    .new_page("about:blank")
                    .await
                    .map_err(|e| VitrinaError::Page {
                        message: e.to_string(),
                    })?;

            Ok(Page {
                url: String::from("about:blank"),
                inner: cdp_page,
            })
        }

        /// Get the browser configuration
        #[must_use]
        pub const fn config(&self) -> &BrowserConfig {
            &self.config
        }

        /// Close the browser
        pub async fn close(mut self) -> VitrinaResult<()> {
            self.inner
                .close()
                .await
                .map_err(|e| VitrinaError::BrowserLaunch {
                    message: e.to_string(),
                })?;
            Ok(())
        }
    }

    /// A browser page backed by a live CDP connection
    #[derive(Debug)]
    pub struct Page {
        url: String,
        inner: CdpPage,
    }

    impl Page {
        /// Navigate to a URL
        ///
        /// # Errors
        ///
        /// Returns an error if navigation fails
        pub async fn goto(&mut self, url: &str) -> VitrinaResult<()> {
            self.inner
                .goto(url)
                .await
                .map_err(|e| VitrinaError::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            self.url = url.to_string();
            Ok(())
        }

        /// Read the current page title
        ///
        /// # Errors
        ///
        /// Returns an error if the driver call fails
        pub async fn title(&self) -> VitrinaResult<String> {
            let title = self
                .inner
                .get_title()
                .await
                .map_err(|e| VitrinaError::Page {
                    message: e.to_string(),
                })?;
            Ok(title.unwrap_or_default())
        }

        /// Type a value into the element behind `locator`
        ///
        /// # Errors
        ///
        /// Returns `ElementNotFound` if the locator does not resolve
        /// within its timeout
        pub async fn fill(&mut self, locator: &Locator, value: &str) -> VitrinaResult<()> {
            let element = self.resolve(locator).await?;
            element
                .focus()
                .await
                .map_err(|e| VitrinaError::Page {
                    message: e.to_string(),
                })?
                .type_str(value)
                .await
                .map_err(|e| VitrinaError::Page {
                    message: e.to_string(),
                })?;
            Ok(())
        }

        /// Click the element behind `locator`
        ///
        /// # Errors
        ///
        /// Returns `ElementNotFound` if the locator does not resolve
        /// within its timeout
        pub async fn click(&mut self, locator: &Locator) -> VitrinaResult<()> {
            let element = self.resolve(locator).await?;
            element.click().await.map_err(|e| VitrinaError::Page {
                message: e.to_string(),
            })?;
            Ok(())
        }

        /// Capture a PNG screenshot of the page
        ///
        /// # Errors
        ///
        /// Returns an error if the capture fails
        pub async fn screenshot(&self) -> VitrinaResult<Vec<u8>> {
            let params = CaptureScreenshotParams::builder()
                .format(CaptureScreenshotFormat::Png)
                .build();

            let screenshot =
                self.inner
                    .execute(params)
                    .await
                    .map_err(|e| VitrinaError::Screenshot {
                        message: e.to_string(),
                    })?;

            use base64::Engine;
            base64::engine::general_purpose::STANDARD
                .decode(&screenshot.data)
                .map_err(|e| VitrinaError::Screenshot {
                    message: e.to_string(),
                })
        }

        /// Get the current URL
        #[must_use]
        pub fn current_url(&self) -> &str {
            &self.url
        }

        /// Resolve a locator, polling until its timeout elapses.
        async fn resolve(&self, locator: &Locator) -> VitrinaResult<Element> {
            let css = locator.selector().to_css();
            let deadline = Instant::now() + locator.timeout();
            loop {
                match self.inner.find_element(&css).await {
                    Ok(element) => return Ok(element),
                    Err(_) if Instant::now() < deadline => {
                        tokio::time::sleep(ELEMENT_POLL_INTERVAL).await;
                    }
                    Err(_) => return Err(VitrinaError::ElementNotFound { selector: css }),
                }
            }
        }
    }
}

// ============================================================================
// Scripted fake (when the `browser` feature is NOT enabled)
// ============================================================================

#[cfg(not(feature = "browser"))]
#[allow(clippy::unused_async)] // same call surface as the CDP driver
mod mock {
    use super::{BrowserConfig, Locator, VitrinaError, VitrinaResult};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Scripted page behavior for the fake driver.
    ///
    /// The open/close counters are shared handles so tests can observe the
    /// session lifecycle after the session itself has been consumed.
    #[derive(Debug, Clone, Default)]
    pub struct MockScript {
        /// Title the page reports after navigation
        pub title_after_goto: String,
        /// Title the page reports after a submit click (None = unchanged)
        pub title_after_submit: Option<String>,
        /// Selectors that fail to resolve
        pub missing_selectors: Vec<String>,
        opened: Arc<AtomicUsize>,
        closed: Arc<AtomicUsize>,
    }

    impl MockScript {
        /// Create an empty script
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Set the title reported after navigation
        #[must_use]
        pub fn with_title_after_goto(mut self, title: impl Into<String>) -> Self {
            self.title_after_goto = title.into();
            self
        }

        /// Set the title reported after a submit click
        #[must_use]
        pub fn with_title_after_submit(mut self, title: impl Into<String>) -> Self {
            self.title_after_submit = Some(title.into());
            self
        }

        /// Mark a selector as unresolvable
        #[must_use]
        pub fn with_missing_selector(mut self, css: impl Into<String>) -> Self {
            self.missing_selectors.push(css.into());
            self
        }

        /// Number of browser launches observed
        #[must_use]
        pub fn opened(&self) -> usize {
            self.opened.load(Ordering::SeqCst)
        }

        /// Number of browser closes observed
        #[must_use]
        pub fn closed(&self) -> usize {
            self.closed.load(Ordering::SeqCst)
        }
    }

    /// Browser instance (fake when the `browser` feature is disabled)
    #[derive(Debug)]
    pub struct Browser {
        config: BrowserConfig,
    }

    impl Browser {
        /// Launch a new browser instance
        ///
        /// # Errors
        ///
        /// Returns an error if the browser cannot be launched
        pub async fn launch(config: BrowserConfig) -> VitrinaResult<Self> {
            config.script.opened.fetch_add(1, Ordering::SeqCst);
            Ok(Self { config })
        }

        /// Create a new page
        ///
        /// # Errors
        ///
        /// Returns an error if the page cannot be created
        pub async fn new_page(&self) -> VitrinaResult<Page> {
            Ok(Page {
                url: String::from("about:blank"),
                title: String::new(),
                script: self.config.script.clone(),
            })
        }

        /// Get the browser configuration
        #[must_use]
        pub const fn config(&self) -> &BrowserConfig {
            &self.config
        }

        /// Close the browser
        pub async fn close(self) -> VitrinaResult<()> {
            self.config.script.closed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// A browser page (fake when the `browser` feature is disabled)
    #[derive(Debug)]
    pub struct Page {
        url: String,
        title: String,
        script: MockScript,
    }

    impl Page {
        /// Navigate to a URL
        pub async fn goto(&mut self, url: &str) -> VitrinaResult<()> {
            self.url = url.to_string();
            self.title = self.script.title_after_goto.clone();
            Ok(())
        }

        /// Read the current page title
        pub async fn title(&self) -> VitrinaResult<String> {
            Ok(self.title.clone())
        }

        /// Type a value into the element behind `locator`
        pub async fn fill(&mut self, locator: &Locator, _value: &str) -> VitrinaResult<()> {
            self.require(locator)
        }

        /// Click the element behind `locator`
        pub async fn click(&mut self, locator: &Locator) -> VitrinaResult<()> {
            self.require(locator)?;
            if let Some(ref title) = self.script.title_after_submit {
                self.title = title.clone();
            }
            Ok(())
        }

        /// Capture a screenshot (fake returns a placeholder payload)
        pub async fn screenshot(&self) -> VitrinaResult<Vec<u8>> {
            Ok(b"fake-png".to_vec())
        }

        /// Get the current URL
        #[must_use]
        pub fn current_url(&self) -> &str {
            &self.url
        }

        fn require(&self, locator: &Locator) -> VitrinaResult<()> {
            let css = locator.selector().to_css();
            if self.script.missing_selectors.contains(&css) {
                return Err(VitrinaError::ElementNotFound { selector: css });
            }
            Ok(())
        }
    }

}

// Re-export based on feature
#[cfg(feature = "browser")]
pub use cdp::{Browser, Page};

#[cfg(not(feature = "browser"))]
pub use mock::{Browser, MockScript, Page};
